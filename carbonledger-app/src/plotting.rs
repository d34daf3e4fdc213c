//! Chart output for footprint runs.

use anyhow::Result;
use carbonledger_core::{
    assessment::AVERAGE_AMERICAN_TONS, engine::ProfileEstimate, logger::ReportEntry, Category,
};
use plotters::prelude::*;

const SAGE: RGBColor = RGBColor(135, 169, 107);
const DARK_FOREST: RGBColor = RGBColor(34, 68, 34);

fn y_ceiling(values: impl Iterator<Item = f64>) -> f64 {
    values.filter(|v| v.is_finite()).fold(1.0, f64::max) * 1.1
}

/// Profile ids may contain path separators or other characters unfit for a file name.
fn file_stem(profile_id: &str) -> String {
    profile_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

/// Bar chart of one profile's category subtotals in metric tons.
pub fn plot_category_breakdown(output_dir: &str, estimate: &ProfileEstimate) -> Result<()> {
    let tons = &estimate.output.metric_tons;
    if !tons.total.is_finite() {
        eprintln!(
            "[Plotting] Warning: total for '{}' is not finite, skipping chart.",
            estimate.profile.profile_id
        );
        return Ok(());
    }

    let path = format!(
        "{}/breakdown_{}.png",
        output_dir,
        file_stem(&estimate.profile.profile_id)
    );
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tons = y_ceiling(tons.categories().map(|(_, v)| v));
    let caption = format!(
        "{}: {:.2} metric tons CO₂e per year",
        estimate.profile.name, tons.total
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 36).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0u32..Category::ALL.len() as u32).into_segmented(),
            0f64..max_tons,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Category")
        .y_desc("Metric tons CO₂e / year")
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => Category::ALL
                .get(*i as usize)
                .map_or(String::new(), |c| c.label().to_string()),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(SAGE.filled())
            .margin(30)
            .data(tons.categories().enumerate().map(|(i, (_, v))| (i as u32, v))),
    )?;

    root.present()?;
    eprintln!("[Plotting] Saved '{}'.", path);
    Ok(())
}

/// Compares the totals of every profile in a report against the average American footprint.
pub fn plot_profile_comparison(output_dir: &str, report_path: &str) -> Result<()> {
    let entries = parse_report_file(report_path)?;
    let entries: Vec<ReportEntry> = entries.into_iter().filter(|e| e.total_t.is_finite()).collect();

    if entries.is_empty() {
        eprintln!("[Plotting] Warning: No finite totals to compare.");
        return Ok(());
    }

    let path = format!("{}/profile_comparison.png", output_dir);
    let root = BitMapBackend::new(&path, (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tons = y_ceiling(
        entries
            .iter()
            .map(|e| e.total_t)
            .chain(std::iter::once(AVERAGE_AMERICAN_TONS)),
    );
    let count = entries.len() as u32;

    let mut chart = ChartBuilder::on(&root)
        .caption("Annual Footprint by Profile", ("sans-serif", 40).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..count).into_segmented(), 0f64..max_tons)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Metric tons CO₂e / year")
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => entries
                .get(*i as usize)
                .map_or(String::new(), |e| e.profile_id.clone()),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(SAGE.filled())
            .margin(20)
            .data(entries.iter().enumerate().map(|(i, e)| (i as u32, e.total_t))),
    )?;

    chart
        .draw_series(LineSeries::new(
            vec![
                (SegmentValue::Exact(0), AVERAGE_AMERICAN_TONS),
                (SegmentValue::Last, AVERAGE_AMERICAN_TONS),
            ],
            DARK_FOREST.stroke_width(2),
        ))?
        .label("Average American")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], DARK_FOREST.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    eprintln!("[Plotting] Saved '{}'.", path);
    Ok(())
}

/// Reads a run's `report.csv` back into memory.
fn parse_report_file(report_path: &str) -> Result<Vec<ReportEntry>> {
    let mut reader = csv::Reader::from_path(report_path)?;
    let mut entries = Vec::new();
    for result in reader.deserialize() {
        let record: ReportEntry = result?;
        entries.push(record);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stem_replaces_separators() {
        assert_eq!(file_stem("HH-01"), "HH-01");
        assert_eq!(file_stem("north/HH 02"), "north_HH_02");
        assert_eq!(file_stem("..\\up"), "___up");
    }
}
