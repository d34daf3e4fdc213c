use serde::{Deserialize, Serialize};
use std::fmt;

/// Diet category selected on the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DietType {
    #[default]
    Omnivore,
    Pescatarian,
    Vegetarian,
    Vegan,
}

impl DietType {
    pub const ALL: [DietType; 4] = [
        DietType::Omnivore,
        DietType::Pescatarian,
        DietType::Vegetarian,
        DietType::Vegan,
    ];

    /// Parses a form label. Unrecognized labels fall back to `Omnivore`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "pescatarian" => DietType::Pescatarian,
            "vegetarian" => DietType::Vegetarian,
            "vegan" => DietType::Vegan,
            _ => DietType::Omnivore,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietType::Omnivore => "omnivore",
            DietType::Pescatarian => "pescatarian",
            DietType::Vegetarian => "vegetarian",
            DietType::Vegan => "vegan",
        }
    }
}

impl From<String> for DietType {
    fn from(label: String) -> Self {
        DietType::from_label(&label)
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the calculator form collects, already coerced to numbers.
///
/// Units follow the form labels: miles per week, miles per gallon, flights
/// per year, kWh and therms per month, items per year, and percentages on a
/// 0-100 scale. No range is enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EstimatorInput {
    // Transportation
    pub car_mileage: f64,
    pub car_efficiency: f64,
    pub flight_short_haul: f64,
    pub flight_medium_haul: f64,
    pub flight_long_haul: f64,
    pub public_transport: f64,

    // Home energy
    pub electricity_usage: f64,
    pub natural_gas_usage: f64,
    pub renewable_percentage: f64,
    pub household_size: f64,

    // Food and consumption
    pub diet_type: DietType,
    pub local_food_percentage: f64,
    pub new_clothing_items: f64,
    pub new_electronics_items: f64,

    // Waste
    pub recycling_percentage: f64,
    pub composting_percentage: f64,
}

impl Default for EstimatorInput {
    /// The form's initial state: zeros, a 25 mpg car and a single-person household.
    fn default() -> Self {
        Self {
            car_mileage: 0.0,
            car_efficiency: 25.0,
            flight_short_haul: 0.0,
            flight_medium_haul: 0.0,
            flight_long_haul: 0.0,
            public_transport: 0.0,
            electricity_usage: 0.0,
            natural_gas_usage: 0.0,
            renewable_percentage: 0.0,
            household_size: 1.0,
            diet_type: DietType::Omnivore,
            local_food_percentage: 0.0,
            new_clothing_items: 0.0,
            new_electronics_items: 0.0,
            recycling_percentage: 0.0,
            composting_percentage: 0.0,
        }
    }
}
