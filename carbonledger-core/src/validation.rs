//! Range checks the estimator deliberately does not apply.
//!
//! `validate` only reports; callers decide whether an issue is fatal.

use carbonledger_schemas::input::EstimatorInput;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    NotFinite { field: &'static str, value: f64 },
    Negative { field: &'static str, value: f64 },
    PercentageOutOfRange { field: &'static str, value: f64 },
    HouseholdTooSmall(f64),
    ZeroCarEfficiency { weekly_miles: f64 },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::NotFinite { field, value } => {
                write!(f, "{} is not a finite number ({})", field, value)
            }
            ValidationIssue::Negative { field, value } => {
                write!(f, "{} is negative ({})", field, value)
            }
            ValidationIssue::PercentageOutOfRange { field, value } => {
                write!(f, "{} is outside 0-100 ({})", field, value)
            }
            ValidationIssue::HouseholdTooSmall(size) => {
                write!(f, "householdSize must be at least 1 ({})", size)
            }
            ValidationIssue::ZeroCarEfficiency { weekly_miles } => write!(
                f,
                "carEfficiency is 0 while carMileage is {}; car emissions are unbounded",
                weekly_miles
            ),
        }
    }
}

pub fn validate(input: &EstimatorInput) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let quantities = [
        ("carMileage", input.car_mileage),
        ("carEfficiency", input.car_efficiency),
        ("flightShortHaul", input.flight_short_haul),
        ("flightMediumHaul", input.flight_medium_haul),
        ("flightLongHaul", input.flight_long_haul),
        ("publicTransport", input.public_transport),
        ("electricityUsage", input.electricity_usage),
        ("naturalGasUsage", input.natural_gas_usage),
        ("newClothingItems", input.new_clothing_items),
        ("newElectronicsItems", input.new_electronics_items),
    ];
    let percentages = [
        ("renewablePercentage", input.renewable_percentage),
        ("localFoodPercentage", input.local_food_percentage),
        ("recyclingPercentage", input.recycling_percentage),
        ("compostingPercentage", input.composting_percentage),
    ];

    for (field, value) in quantities {
        if !value.is_finite() {
            issues.push(ValidationIssue::NotFinite { field, value });
        } else if value < 0.0 {
            issues.push(ValidationIssue::Negative { field, value });
        }
    }

    for (field, value) in percentages {
        if !value.is_finite() {
            issues.push(ValidationIssue::NotFinite { field, value });
        } else if !(0.0..=100.0).contains(&value) {
            issues.push(ValidationIssue::PercentageOutOfRange { field, value });
        }
    }

    if !input.household_size.is_finite() {
        issues.push(ValidationIssue::NotFinite {
            field: "householdSize",
            value: input.household_size,
        });
    } else if input.household_size < 1.0 {
        issues.push(ValidationIssue::HouseholdTooSmall(input.household_size));
    }

    if input.car_efficiency == 0.0 && input.car_mileage != 0.0 {
        issues.push(ValidationIssue::ZeroCarEfficiency {
            weekly_miles: input.car_mileage,
        });
    }

    issues
}

/// Joins issues into one line for error messages.
pub fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
