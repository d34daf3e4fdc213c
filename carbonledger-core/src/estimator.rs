//! The footprint formula.
//!
//! Every category is first computed in pounds of CO2e per year, summed in
//! pounds, and only then converted to metric tons. Nothing here validates
//! its input: blank fields are expected to arrive as zero, percentages are
//! used as given, and a household size of zero is not guarded.

use carbonledger_schemas::{factors::EmissionFactors, input::EstimatorInput};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Transportation,
    HomeEnergy,
    Food,
    Consumption,
    Waste,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Transportation,
        Category::HomeEnergy,
        Category::Food,
        Category::Consumption,
        Category::Waste,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Transportation => "Transportation",
            Category::HomeEnergy => "Home Energy",
            Category::Food => "Food",
            Category::Consumption => "Consumption",
            Category::Waste => "Waste",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category subtotals and their sum, in a single unit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub transportation: f64,
    pub home_energy: f64,
    pub food: f64,
    pub consumption: f64,
    pub waste: f64,
    pub total: f64,
}

impl EmissionBreakdown {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::HomeEnergy => self.home_energy,
            Category::Food => self.food,
            Category::Consumption => self.consumption,
            Category::Waste => self.waste,
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    fn scaled(&self, divisor: f64) -> Self {
        Self {
            transportation: self.transportation / divisor,
            home_energy: self.home_energy / divisor,
            food: self.food / divisor,
            consumption: self.consumption / divisor,
            waste: self.waste / divisor,
            total: self.total / divisor,
        }
    }
}

/// Result of one estimate. `metric_tons` is what the calculator displays;
/// `pounds` keeps the values it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorOutput {
    pub pounds: EmissionBreakdown,
    pub metric_tons: EmissionBreakdown,
}

impl EstimatorOutput {
    pub fn total_metric_tons(&self) -> f64 {
        self.metric_tons.total
    }

    pub fn metric_tons_for(&self, category: Category) -> f64 {
        self.metric_tons.get(category)
    }
}

/// Estimates annual emissions with the default factor table.
pub fn estimate(input: &EstimatorInput) -> EstimatorOutput {
    estimate_with(input, &EmissionFactors::default())
}

pub fn estimate_with(input: &EstimatorInput, factors: &EmissionFactors) -> EstimatorOutput {
    let transportation = transportation_lbs(input, factors);
    let home_energy = home_energy_lbs(input, factors);
    let food = food_lbs(input, factors);
    let consumption = consumption_lbs(input, factors);
    let waste = waste_lbs(input, factors);

    let pounds = EmissionBreakdown {
        transportation,
        home_energy,
        food,
        consumption,
        waste,
        total: transportation + home_energy + food + consumption + waste,
    };

    EstimatorOutput {
        metric_tons: pounds.scaled(factors.lbs_per_metric_ton),
        pounds,
    }
}

fn transportation_lbs(input: &EstimatorInput, f: &EmissionFactors) -> f64 {
    let car = (input.car_mileage * f.weeks_per_year) / input.car_efficiency * f.car_lbs_per_gallon;
    let short_haul = input.flight_short_haul * f.short_haul_lbs_per_flight;
    let medium_haul = input.flight_medium_haul * f.medium_haul_lbs_per_flight;
    let long_haul = input.flight_long_haul * f.long_haul_lbs_per_flight;
    let transit = input.public_transport * f.weeks_per_year * f.transit_lbs_per_mile;

    car + short_haul + medium_haul + long_haul + transit
}

/// Per-person share of household electricity and gas.
fn home_energy_lbs(input: &EstimatorInput, f: &EmissionFactors) -> f64 {
    let electricity = input.electricity_usage
        * f.months_per_year
        * f.electricity_lbs_per_kwh
        * (1.0 - input.renewable_percentage / 100.0);
    let natural_gas = input.natural_gas_usage * f.months_per_year * f.natural_gas_lbs_per_therm;

    (electricity + natural_gas) / input.household_size
}

fn food_lbs(input: &EstimatorInput, f: &EmissionFactors) -> f64 {
    let diet_tons = f.diet_tons_per_year.for_diet(input.diet_type);
    diet_tons * f.lbs_per_short_ton * (1.0 - input.local_food_percentage / f.local_food_divisor)
}

fn consumption_lbs(input: &EstimatorInput, f: &EmissionFactors) -> f64 {
    input.new_clothing_items * f.clothing_lbs_per_item
        + input.new_electronics_items * f.electronics_lbs_per_item
}

fn waste_lbs(input: &EstimatorInput, f: &EmissionFactors) -> f64 {
    let base = f.waste_baseline_lbs;
    let recycling = base * (input.recycling_percentage / 100.0) * f.recycling_reduction_rate;
    let composting = base * (input.composting_percentage / 100.0) * f.composting_reduction_rate;

    base - recycling - composting
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbonledger_schemas::input::DietType;

    #[test]
    fn zero_local_food_keeps_full_diet_factor() {
        let input = EstimatorInput {
            diet_type: DietType::Vegan,
            ..EstimatorInput::default()
        };
        assert_eq!(food_lbs(&input, &EmissionFactors::default()), 3000.0);
    }

    #[test]
    fn waste_reductions_stack() {
        let input = EstimatorInput {
            recycling_percentage: 100.0,
            composting_percentage: 100.0,
            ..EstimatorInput::default()
        };
        // 700 - 350 - 210
        assert!((waste_lbs(&input, &EmissionFactors::default()) - 140.0).abs() < 1e-9);
    }

    #[test]
    fn car_term_uses_weekly_miles_over_efficiency() {
        let input = EstimatorInput {
            car_mileage: 100.0,
            car_efficiency: 25.0,
            ..EstimatorInput::default()
        };
        assert!((transportation_lbs(&input, &EmissionFactors::default()) - 4076.8).abs() < 1e-9);
    }

    #[test]
    fn total_is_summed_in_pounds_before_conversion() {
        let output = estimate(&EstimatorInput::default());
        assert_eq!(output.pounds.total, 7300.0);
        assert_eq!(output.metric_tons.total, 7300.0 / 2204.62);
    }
}
