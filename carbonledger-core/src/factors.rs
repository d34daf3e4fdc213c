use crate::error::EstimatorError;
use carbonledger_schemas::{factors::EmissionFactors, file_formats::FactorFile};
use std::{fs, path::Path};

/// Reads a factor override file. Factors it leaves out keep their defaults.
pub fn load_factor_file<P: AsRef<Path>>(path: P) -> Result<EmissionFactors, EstimatorError> {
    let display = path.as_ref().display().to_string();
    let content =
        fs::read_to_string(path.as_ref()).map_err(|e| EstimatorError::FileIO(display.clone(), e))?;
    let file: FactorFile =
        serde_yaml::from_str(&content).map_err(|e| EstimatorError::YamlParsing(display, e))?;
    Ok(file.factors)
}
