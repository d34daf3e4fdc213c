use anyhow::{Context, Result};
use carbonledger_core::form::{coerce, FormFields};
use carbonledger_schemas::{factors::EmissionFactors, file_formats::FactorFile, profile::Profile};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::Path;

mod config;
mod plotting;
mod workflow;

#[derive(Parser)]
#[command(name = "carbonledger", version, about = "Personal carbon footprint calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate one footprint from a profile file and/or NAME=VALUE form fields.
    Estimate {
        /// Profile YAML file; every profile in it is estimated.
        #[arg(long)]
        profile: Option<String>,

        /// Calculator form field, e.g. --field carMileage=120. Blank values count as 0.
        #[arg(long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,

        #[command(flatten)]
        run: RunArgs,
    },
    /// Estimate every profile found in a directory of YAML files.
    Batch {
        #[arg(long)]
        dir: String,

        #[command(flatten)]
        run: RunArgs,
    },
    /// Print the effective emission factor table as YAML.
    Factors {
        #[arg(long)]
        factors: Option<String>,
    },
}

#[derive(Args)]
struct RunArgs {
    /// YAML file overriding individual emission factors.
    #[arg(long)]
    factors: Option<String>,

    /// Directory under which a timestamped run directory is created.
    #[arg(long, default_value = "./data/runs")]
    output_dir: String,

    /// Fail on out-of-range input instead of warning.
    #[arg(long)]
    strict: bool,

    #[arg(long)]
    no_plots: bool,

    /// Print results as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Estimate { profile, fields, run } => {
            let profiles = profiles_for_estimate(profile.as_deref(), &fields)?;
            execute(&profiles, &run)
        }
        Command::Batch { dir, run } => {
            let library = config::ProfileLibrary::load(&dir)?;
            execute(&library.sorted(), &run)
        }
        Command::Factors { factors } => {
            let factors = config::load_factors(factors.as_deref())?;
            print!("{}", factor_file_yaml(factors)?);
            Ok(())
        }
    }
}

/// Form fields, when given, are applied on top of every profile from the file,
/// or on top of the form defaults when there is no file.
fn profiles_for_estimate(profile_path: Option<&str>, fields: &[String]) -> Result<Vec<Profile>> {
    let form = FormFields::from_assignments(fields)?;

    let mut profiles = match profile_path {
        Some(path) => config::ProfileLibrary::load_file(path)?.sorted(),
        None => vec![Profile {
            profile_id: "form".to_string(),
            name: "Calculator form".to_string(),
            input: coerce(&form),
        }],
    };

    if profile_path.is_some() && !form.is_empty() {
        for profile in &mut profiles {
            profile.input = form.apply_to(profile.input.clone());
        }
    }

    Ok(profiles)
}

/// Serializes factors in the same shape `--factors` reads.
fn factor_file_yaml(factors: EmissionFactors) -> Result<String> {
    let file = FactorFile {
        schema_version: "1.0".to_string(),
        factors,
    };
    Ok(serde_yaml::to_string(&file)?)
}

fn execute(profiles: &[Profile], run: &RunArgs) -> Result<()> {
    if profiles.is_empty() {
        anyhow::bail!("No profiles to estimate");
    }

    let factors = config::load_factors(run.factors.as_deref())?;

    let output_dir = format!(
        "{}/run_{}",
        run.output_dir,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

    // Keep the factor table next to the results for traceability
    fs::write(
        Path::new(&output_dir).join("factors.yaml"),
        factor_file_yaml(factors.clone())?,
    )?;

    let options = workflow::RunOptions {
        output_dir: output_dir.clone(),
        strict: run.strict,
        plots: !run.no_plots,
        json: run.json,
    };
    workflow::run_estimates(profiles, factors, &options)?;

    if !run.json {
        println!("\nFootprint run complete. Results are in '{}'", output_dir);
    }
    Ok(())
}
