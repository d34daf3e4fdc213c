use crate::{engine::engine::FootprintEngine, error::EstimatorError, logger::ReportLogger};
use carbonledger_schemas::factors::EmissionFactors;

/// A fluent builder for constructing a `FootprintEngine`.
///
/// Without further configuration the engine uses the default factor table,
/// reports validation issues without failing, and writes no report.
#[derive(Default)]
pub struct EngineBuilder {
    factors: Option<EmissionFactors>,
    strict: bool,
    report_path: Option<String>,
}

impl EngineBuilder {
    /// Creates a new, empty `EngineBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the default emission factor table.
    pub fn with_factors(mut self, factors: EmissionFactors) -> Self {
        self.factors = Some(factors);
        self
    }

    /// When set, any validation issue makes `evaluate` fail instead of warn.
    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Configures the engine to append one CSV row per evaluated profile.
    pub fn with_report_logging_to_file(mut self, path: &str) -> Self {
        self.report_path = Some(path.to_string());
        self
    }

    /// Consumes the builder and returns a configured `FootprintEngine`.
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError::FileIO` if the report file cannot be created.
    pub fn build(self) -> Result<FootprintEngine, EstimatorError> {
        let logger = match self.report_path {
            Some(path) => Some(
                ReportLogger::new(&path).map_err(|e| EstimatorError::FileIO(path.clone(), e))?,
            ),
            None => None,
        };

        Ok(FootprintEngine {
            factors: self.factors.unwrap_or_default(),
            strict: self.strict,
            logger,
        })
    }
}
