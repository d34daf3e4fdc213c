//! Turning raw calculator form values into an `EstimatorInput`.
//!
//! The form hands over strings. A blank or non-numeric value counts as zero;
//! a field that was never submitted keeps the form's initial value.

use crate::error::EstimatorError;
use carbonledger_schemas::input::{DietType, EstimatorInput};
use std::collections::HashMap;

/// Form field names as submitted by the calculator page.
pub const FIELD_NAMES: [&str; 16] = [
    "carMileage",
    "carEfficiency",
    "flightShortHaul",
    "flightMediumHaul",
    "flightLongHaul",
    "publicTransport",
    "electricityUsage",
    "naturalGasUsage",
    "renewablePercentage",
    "householdSize",
    "dietType",
    "localFoodPercentage",
    "newClothingItems",
    "newElectronicsItems",
    "recyclingPercentage",
    "compostingPercentage",
];

/// Raw field values keyed by form field name.
#[derive(Debug, Default, Clone)]
pub struct FormFields {
    values: HashMap<String, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value. Unknown names are rejected.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EstimatorError> {
        if !FIELD_NAMES.contains(&name) {
            return Err(EstimatorError::UnknownField(name.to_string()));
        }
        self.values.insert(name.to_string(), value.to_string());
        Ok(())
    }

    /// Parses a `name=value` pair and sets it. The value may be empty.
    pub fn parse_assignment(&mut self, assignment: &str) -> Result<(), EstimatorError> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| EstimatorError::MalformedField(assignment.to_string()))?;
        self.set(name.trim(), value)
    }

    pub fn from_assignments<I, S>(assignments: I) -> Result<Self, EstimatorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fields = Self::new();
        for assignment in assignments {
            fields.parse_assignment(assignment.as_ref())?;
        }
        Ok(fields)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Blank and non-numeric values become zero. `NaN`, `inf` and literals that
/// overflow to infinity count as non-numeric.
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Builds an input from the submitted fields, starting from the form defaults.
pub fn coerce(fields: &FormFields) -> EstimatorInput {
    fields.apply_to(EstimatorInput::default())
}

impl FormFields {
    /// Overwrites the submitted fields of `input`, leaving the rest untouched.
    pub fn apply_to(&self, mut input: EstimatorInput) -> EstimatorInput {
        for (name, raw) in &self.values {
            let slot = match name.as_str() {
                "dietType" => {
                    input.diet_type = DietType::from_label(raw);
                    continue;
                }
                "carMileage" => &mut input.car_mileage,
                "carEfficiency" => &mut input.car_efficiency,
                "flightShortHaul" => &mut input.flight_short_haul,
                "flightMediumHaul" => &mut input.flight_medium_haul,
                "flightLongHaul" => &mut input.flight_long_haul,
                "publicTransport" => &mut input.public_transport,
                "electricityUsage" => &mut input.electricity_usage,
                "naturalGasUsage" => &mut input.natural_gas_usage,
                "renewablePercentage" => &mut input.renewable_percentage,
                "householdSize" => &mut input.household_size,
                "localFoodPercentage" => &mut input.local_food_percentage,
                "newClothingItems" => &mut input.new_clothing_items,
                "newElectronicsItems" => &mut input.new_electronics_items,
                "recyclingPercentage" => &mut input.recycling_percentage,
                "compostingPercentage" => &mut input.composting_percentage,
                // `set` only admits FIELD_NAMES
                _ => continue,
            };
            *slot = coerce_number(raw);
        }

        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn untouched_form_is_the_default_input() {
        assert_eq!(coerce(&FormFields::new()), EstimatorInput::default());
    }

    #[test]
    fn blank_and_garbage_become_zero() {
        let fields =
            FormFields::from_assignments(["carMileage=", "electricityUsage=lots", "householdSize= 3 "])
                .unwrap();
        let input = coerce(&fields);
        assert_eq!(input.car_mileage, 0.0);
        assert_eq!(input.electricity_usage, 0.0);
        assert_eq!(input.household_size, 3.0);
    }

    #[test]
    fn non_finite_text_becomes_zero() {
        for raw in ["NaN", "nan", "inf", "-inf", "infinity", "1e400"] {
            assert_eq!(coerce_number(raw), 0.0, "{raw}");
        }
        let fields = FormFields::from_assignments(["carMileage=NaN", "electricityUsage=1e400"]).unwrap();
        let input = coerce(&fields);
        assert_eq!(input.car_mileage, 0.0);
        assert_eq!(input.electricity_usage, 0.0);
        assert!(crate::estimate(&input).metric_tons.total.is_finite());
    }

    #[test]
    fn blank_efficiency_is_zero_not_default() {
        let fields = FormFields::from_assignments(["carEfficiency="]).unwrap();
        assert_eq!(coerce(&fields).car_efficiency, 0.0);
    }

    #[test]
    fn diet_label_is_lenient() {
        let fields = FormFields::from_assignments(["dietType=VEGAN"]).unwrap();
        assert_eq!(coerce(&fields).diet_type, DietType::Vegan);
        let fields = FormFields::from_assignments(["dietType=paleo"]).unwrap();
        assert_eq!(coerce(&fields).diet_type, DietType::Omnivore);
    }

    #[test]
    fn apply_to_keeps_unsubmitted_values() {
        let base = EstimatorInput {
            natural_gas_usage: 30.0,
            diet_type: DietType::Vegetarian,
            ..EstimatorInput::default()
        };
        let fields = FormFields::from_assignments(["carMileage=75"]).unwrap();
        let input = fields.apply_to(base);
        assert_eq!(input.car_mileage, 75.0);
        assert_eq!(input.natural_gas_usage, 30.0);
        assert_eq!(input.diet_type, DietType::Vegetarian);
    }

    #[test]
    fn later_assignment_wins() {
        let fields = FormFields::from_assignments(["carMileage=10", "carMileage=40"]).unwrap();
        assert_eq!(coerce(&fields).car_mileage, 40.0);
    }

    #[test]
    fn rejects_unknown_and_malformed_fields() {
        assert!(matches!(
            FormFields::from_assignments(["carMilage=10"]),
            Err(EstimatorError::UnknownField(name)) if name == "carMilage"
        ));
        assert!(matches!(
            FormFields::from_assignments(["carMileage"]),
            Err(EstimatorError::MalformedField(_))
        ));
    }
}
