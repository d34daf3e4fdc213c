use crate::plotting;
use anyhow::Result;
use carbonledger_core::{
    assessment::{reduction_tips, AVERAGE_AMERICAN_TONS},
    engine::{EngineBuilder, ProfileEstimate},
};
use carbonledger_schemas::{factors::EmissionFactors, profile::Profile};
use serde::Serialize;
use std::path::Path;

/// Options shared by the `estimate` and `batch` commands.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub output_dir: String,
    pub strict: bool,
    pub plots: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct JsonEstimate<'a> {
    profile_id: &'a str,
    name: &'a str,
    metric_tons: &'a carbonledger_core::EmissionBreakdown,
    assessment: &'a carbonledger_core::assessment::Assessment,
    issues: Vec<String>,
}

/// Estimates every profile, writes the CSV report and charts, and prints the summary.
pub fn run_estimates(
    profiles: &[Profile],
    factors: EmissionFactors,
    options: &RunOptions,
) -> Result<Vec<ProfileEstimate>> {
    eprintln!("\n--- [Workflow] Estimating {} profile(s) ---", profiles.len());

    let report_path = Path::new(&options.output_dir).join("report.csv");
    let report_path_str = report_path.to_string_lossy().to_string();

    let mut engine = EngineBuilder::new()
        .with_factors(factors)
        .with_strict_validation(options.strict)
        .with_report_logging_to_file(&report_path_str)
        .build()?;

    let mut estimates = Vec::with_capacity(profiles.len());
    for profile in profiles {
        let estimate = engine.evaluate(profile)?;
        for issue in &estimate.issues {
            eprintln!("[Workflow] Warning ({}): {}", profile.profile_id, issue);
        }
        if options.plots {
            plotting::plot_category_breakdown(&options.output_dir, &estimate)?;
        }
        estimates.push(estimate);
    }
    // Flushes and closes the report before it is read back for plotting.
    drop(engine);

    if options.plots && estimates.len() > 1 {
        plotting::plot_profile_comparison(&options.output_dir, &report_path_str)?;
    }

    if options.json {
        print_json(&estimates)?;
    } else {
        for estimate in &estimates {
            print_summary_report(estimate);
        }
    }

    Ok(estimates)
}

fn print_json(estimates: &[ProfileEstimate]) -> Result<()> {
    println!("{}", render_json(estimates)?);
    Ok(())
}

fn render_json(estimates: &[ProfileEstimate]) -> Result<String> {
    let records: Vec<JsonEstimate> = estimates
        .iter()
        .map(|e| JsonEstimate {
            profile_id: &e.profile.profile_id,
            name: &e.profile.name,
            metric_tons: &e.output.metric_tons,
            assessment: &e.assessment,
            issues: e.issues.iter().map(ToString::to_string).collect(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

fn print_summary_report(estimate: &ProfileEstimate) {
    let tons = &estimate.output.metric_tons;
    let assessment = &estimate.assessment;

    println!("\n\n--- [Footprint Report: {}] ---", estimate.profile.profile_id);
    println!("========================================");
    println!("Profile: {}", estimate.profile.name);
    println!(
        "Total: {:.2} metric tons CO₂e per year ({:.0} lbs)",
        tons.total, estimate.output.pounds.total
    );
    println!(
        "The average American's carbon footprint is about {:.0} metric tons per year.",
        AVERAGE_AMERICAN_TONS
    );
    println!("{}", assessment.band.message());
    println!("----------------------------------------");

    println!("\nBreakdown by Category:");
    for category in &assessment.categories {
        let share = category
            .share_percent
            .map_or("n/a".to_string(), |s| format!("{}%", s));
        println!(
            "  - {:<15} {:>8.2} tons  {:>5}",
            category.category.label(),
            category.metric_tons,
            share
        );
    }

    if let Some(largest) = assessment.largest_category() {
        println!("\nTips to Reduce Your {} Footprint:", largest.label());
        for tip in reduction_tips(largest) {
            println!("  ✓ {}", tip);
        }
    }

    println!("========================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbonledger_schemas::input::EstimatorInput;

    #[test]
    fn json_output_is_a_single_parseable_array() {
        let mut engine = EngineBuilder::new().build().unwrap();
        let estimates = engine
            .run(&[Profile {
                profile_id: "form".to_string(),
                name: "Calculator form".to_string(),
                input: EstimatorInput {
                    car_mileage: 100.0,
                    ..EstimatorInput::default()
                },
            }])
            .unwrap();

        let json = render_json(&estimates).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let records = parsed.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["profile_id"], "form");
        assert_eq!(records[0]["assessment"]["band"], "well_below_average");
    }
}
