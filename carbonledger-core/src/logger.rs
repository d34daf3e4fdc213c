use crate::{assessment::Assessment, estimator::EstimatorOutput};
use carbonledger_schemas::profile::Profile;
use csv::Writer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// One row of `report.csv`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportEntry {
    pub profile_id: String,
    pub profile_name: String,
    pub transportation_t: f64,
    pub home_energy_t: f64,
    pub food_t: f64,
    pub consumption_t: f64,
    pub waste_t: f64,
    pub total_t: f64,
    pub total_lbs: f64,
    pub band: String,
    pub input_json: String,
}

pub struct ReportLogger {
    writer: Writer<fs::File>,
}

impl ReportLogger {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn log_estimate(
        &mut self,
        profile: &Profile,
        output: &EstimatorOutput,
        assessment: &Assessment,
    ) -> Result<(), anyhow::Error> {
        let tons = &output.metric_tons;
        let entry = ReportEntry {
            profile_id: profile.profile_id.clone(),
            profile_name: profile.name.clone(),
            transportation_t: tons.transportation,
            home_energy_t: tons.home_energy,
            food_t: tons.food,
            consumption_t: tons.consumption,
            waste_t: tons.waste,
            total_t: tons.total,
            total_lbs: output.pounds.total,
            band: assessment.band.to_string(),
            input_json: serde_json::to_string(&profile.input)?,
        };

        self.writer.serialize(entry)?;
        self.writer.flush()?;
        Ok(())
    }
}
