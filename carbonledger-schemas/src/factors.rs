use crate::input::DietType;
use serde::{Deserialize, Serialize};

/// Annual food footprint per diet, in short tons of CO2e.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietFactors {
    pub omnivore: f64,
    pub pescatarian: f64,
    pub vegetarian: f64,
    pub vegan: f64,
}

impl Default for DietFactors {
    fn default() -> Self {
        Self {
            omnivore: 3.3,
            pescatarian: 2.5,
            vegetarian: 1.7,
            vegan: 1.5,
        }
    }
}

impl DietFactors {
    pub fn for_diet(&self, diet: DietType) -> f64 {
        match diet {
            DietType::Omnivore => self.omnivore,
            DietType::Pescatarian => self.pescatarian,
            DietType::Vegetarian => self.vegetarian,
            DietType::Vegan => self.vegan,
        }
    }
}

/// Emission factors used by the estimator. All intermediate values are in
/// pounds of CO2e per year; `lbs_per_metric_ton` converts the results.
///
/// Any field left out of a factor file keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactors {
    pub weeks_per_year: f64,
    pub months_per_year: f64,

    pub car_lbs_per_gallon: f64,
    pub short_haul_lbs_per_flight: f64,
    pub medium_haul_lbs_per_flight: f64,
    pub long_haul_lbs_per_flight: f64,
    pub transit_lbs_per_mile: f64,

    pub electricity_lbs_per_kwh: f64,
    pub natural_gas_lbs_per_therm: f64,

    pub diet_tons_per_year: DietFactors,
    pub lbs_per_short_ton: f64,
    /// Local sourcing reduces food emissions by `local_food_percentage / local_food_divisor`.
    /// At 200 a fully local diet only halves the food footprint.
    pub local_food_divisor: f64,

    pub clothing_lbs_per_item: f64,
    pub electronics_lbs_per_item: f64,

    pub waste_baseline_lbs: f64,
    pub recycling_reduction_rate: f64,
    pub composting_reduction_rate: f64,

    pub lbs_per_metric_ton: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            weeks_per_year: 52.0,
            months_per_year: 12.0,
            car_lbs_per_gallon: 19.6,
            short_haul_lbs_per_flight: 500.0,
            medium_haul_lbs_per_flight: 1200.0,
            long_haul_lbs_per_flight: 2500.0,
            transit_lbs_per_mile: 0.25,
            electricity_lbs_per_kwh: 0.92,
            natural_gas_lbs_per_therm: 11.7,
            diet_tons_per_year: DietFactors::default(),
            lbs_per_short_ton: 2000.0,
            local_food_divisor: 200.0,
            clothing_lbs_per_item: 50.0,
            electronics_lbs_per_item: 300.0,
            waste_baseline_lbs: 700.0,
            recycling_reduction_rate: 0.5,
            composting_reduction_rate: 0.3,
            lbs_per_metric_ton: 2204.62,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let yaml = "electricity_lbs_per_kwh: 0.5\ndiet_tons_per_year:\n  vegan: 1.0\n";
        let factors: EmissionFactors = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            factors,
            EmissionFactors {
                electricity_lbs_per_kwh: 0.5,
                diet_tons_per_year: DietFactors {
                    vegan: 1.0,
                    ..DietFactors::default()
                },
                ..EmissionFactors::default()
            }
        );
    }

    #[test]
    fn diet_lookup_matches_table() {
        let diets = DietFactors::default();
        assert_eq!(diets.for_diet(DietType::Omnivore), 3.3);
        assert_eq!(diets.for_diet(DietType::Vegan), 1.5);
    }
}
