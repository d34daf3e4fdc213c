use crate::{
    assessment::Assessment,
    error::EstimatorError,
    estimator::{estimate_with, EstimatorOutput},
    logger::ReportLogger,
    validation::{self, ValidationIssue},
};
use carbonledger_schemas::{factors::EmissionFactors, profile::Profile};

/// Everything produced for one profile.
#[derive(Debug, Clone)]
pub struct ProfileEstimate {
    pub profile: Profile,
    pub output: EstimatorOutput,
    pub assessment: Assessment,
    pub issues: Vec<ValidationIssue>,
}

pub struct FootprintEngine {
    pub(super) factors: EmissionFactors,
    pub(super) strict: bool,
    pub(super) logger: Option<ReportLogger>,
}

impl FootprintEngine {
    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    pub fn evaluate(&mut self, profile: &Profile) -> Result<ProfileEstimate, EstimatorError> {
        let issues = validation::validate(&profile.input);
        if self.strict && !issues.is_empty() {
            return Err(EstimatorError::InvalidInput {
                profile_id: profile.profile_id.clone(),
                issues: validation::summarize(&issues),
            });
        }

        let output = estimate_with(&profile.input, &self.factors);
        let assessment = Assessment::from_output(&output);

        if let Some(logger) = &mut self.logger {
            logger.log_estimate(profile, &output, &assessment)?;
        }

        Ok(ProfileEstimate {
            profile: profile.clone(),
            output,
            assessment,
            issues,
        })
    }

    /// Evaluates profiles in order, stopping at the first error.
    pub fn run(&mut self, profiles: &[Profile]) -> Result<Vec<ProfileEstimate>, EstimatorError> {
        profiles.iter().map(|p| self.evaluate(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineBuilder;
    use carbonledger_schemas::input::EstimatorInput;

    fn profile(id: &str, input: EstimatorInput) -> Profile {
        Profile {
            profile_id: id.to_string(),
            name: id.to_string(),
            input,
        }
    }

    #[test]
    fn lenient_engine_keeps_issues_and_still_estimates() {
        let mut engine = EngineBuilder::new().build().unwrap();
        let zero_household = profile(
            "HH-0",
            EstimatorInput {
                household_size: 0.0,
                electricity_usage: 100.0,
                ..EstimatorInput::default()
            },
        );
        let estimate = engine.evaluate(&zero_household).unwrap();
        assert_eq!(estimate.issues.len(), 1);
        assert!(estimate.output.metric_tons.home_energy.is_infinite());
    }

    #[test]
    fn strict_engine_rejects_invalid_input() {
        let mut engine = EngineBuilder::new()
            .with_strict_validation(true)
            .build()
            .unwrap();
        let bad = profile(
            "HH-BAD",
            EstimatorInput {
                renewable_percentage: 150.0,
                ..EstimatorInput::default()
            },
        );
        match engine.evaluate(&bad) {
            Err(EstimatorError::InvalidInput { profile_id, .. }) => assert_eq!(profile_id, "HH-BAD"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn custom_factors_are_used() {
        let factors = EmissionFactors {
            waste_baseline_lbs: 0.0,
            lbs_per_short_ton: 0.0,
            ..EmissionFactors::default()
        };
        let mut engine = EngineBuilder::new().with_factors(factors).build().unwrap();
        let estimate = engine
            .evaluate(&profile("HH-1", EstimatorInput::default()))
            .unwrap();
        assert_eq!(estimate.output.metric_tons.total, 0.0);
    }
}
