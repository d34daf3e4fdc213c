//! How a result is presented: comparison with the average American
//! footprint, category shares, gauge fill levels and reduction tips.

use crate::estimator::{Category, EstimatorOutput};
use serde::Serialize;
use std::fmt;

/// Reference footprint for an average American, metric tons CO2e per year.
pub const AVERAGE_AMERICAN_TONS: f64 = 16.0;

/// Totals below this are "significantly below average".
pub const WELL_BELOW_AVERAGE_TONS: f64 = 8.0;

/// Total at which the overall gauge is full.
pub const GAUGE_FULL_SCALE_TONS: f64 = 20.0;

/// Subtotal at which a category bar is full.
pub const CATEGORY_FULL_SCALE_TONS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonBand {
    WellBelowAverage,
    BelowAverage,
    AboveAverage,
}

impl ComparisonBand {
    /// NaN totals land in `AboveAverage`, as no comparison against them holds.
    pub fn classify(total_metric_tons: f64) -> Self {
        if total_metric_tons < WELL_BELOW_AVERAGE_TONS {
            ComparisonBand::WellBelowAverage
        } else if total_metric_tons < AVERAGE_AMERICAN_TONS {
            ComparisonBand::BelowAverage
        } else {
            ComparisonBand::AboveAverage
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ComparisonBand::WellBelowAverage => {
                "Great job! Your footprint is significantly below average."
            }
            ComparisonBand::BelowAverage => {
                "Your footprint is below average, but there's room for improvement."
            }
            ComparisonBand::AboveAverage => {
                "Your footprint is above average. Check out our tips section to reduce your impact."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonBand::WellBelowAverage => "well_below_average",
            ComparisonBand::BelowAverage => "below_average",
            ComparisonBand::AboveAverage => "above_average",
        }
    }
}

impl fmt::Display for ComparisonBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole-number share of the total, or `None` when the total can't be divided by.
pub fn category_share_percent(output: &EstimatorOutput, category: Category) -> Option<i64> {
    let total = output.metric_tons.total;
    if total == 0.0 || !total.is_finite() {
        return None;
    }
    let share = output.metric_tons_for(category) / total * 100.0;
    // Halves round toward +inf, so -2.5 becomes -2.
    share.is_finite().then(|| (share + 0.5).floor() as i64)
}

pub fn gauge_fill_percent(total_metric_tons: f64) -> f64 {
    (total_metric_tons / GAUGE_FULL_SCALE_TONS * 100.0).min(100.0)
}

pub fn category_fill_percent(category_metric_tons: f64) -> f64 {
    (category_metric_tons / CATEGORY_FULL_SCALE_TONS * 100.0).min(100.0)
}

pub fn reduction_tips(category: Category) -> &'static [&'static str] {
    match category {
        Category::Transportation => &[
            "Use public transportation when possible",
            "Consider carpooling or ridesharing options",
            "Maintain your vehicle regularly for optimal efficiency",
            "Consider an electric or hybrid vehicle for your next purchase",
            "Walk or bike for short trips when weather permits",
        ],
        Category::HomeEnergy => &[
            "Switch to renewable energy if available",
            "Use energy-efficient appliances",
            "Improve home insulation",
            "Turn off lights and electronics when not in use",
        ],
        Category::Food => &[
            "Reduce meat consumption",
            "Buy local and seasonal produce",
            "Minimize food waste",
            "Choose organic products when possible",
        ],
        // The waste list's "Buy less, reuse more" is the only consumption tip.
        Category::Consumption => &["Buy less, reuse more"],
        Category::Waste => &[
            "Recycle paper, plastic, glass, and metal",
            "Compost food scraps and yard waste",
            "Reduce single-use plastics",
            "Buy less, reuse more",
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryAssessment {
    pub category: Category,
    pub metric_tons: f64,
    pub share_percent: Option<i64>,
    pub fill_percent: f64,
}

/// Everything the results panel shows for one estimate.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub total_metric_tons: f64,
    pub band: ComparisonBand,
    pub gauge_fill_percent: f64,
    pub categories: Vec<CategoryAssessment>,
}

impl Assessment {
    pub fn from_output(output: &EstimatorOutput) -> Self {
        let total = output.total_metric_tons();
        let categories = output
            .metric_tons
            .categories()
            .map(|(category, metric_tons)| CategoryAssessment {
                category,
                metric_tons,
                share_percent: category_share_percent(output, category),
                fill_percent: category_fill_percent(metric_tons),
            })
            .collect();

        Self {
            total_metric_tons: total,
            band: ComparisonBand::classify(total),
            gauge_fill_percent: gauge_fill_percent(total),
            categories,
        }
    }

    /// The category contributing the most, if any are finite.
    pub fn largest_category(&self) -> Option<Category> {
        self.categories
            .iter()
            .filter(|c| c.metric_tons.is_finite())
            .max_by(|a, b| {
                a.metric_tons
                    .partial_cmp(&b.metric_tons)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|c| c.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(ComparisonBand::classify(0.0), ComparisonBand::WellBelowAverage);
        assert_eq!(ComparisonBand::classify(7.99), ComparisonBand::WellBelowAverage);
        assert_eq!(ComparisonBand::classify(8.0), ComparisonBand::BelowAverage);
        assert_eq!(ComparisonBand::classify(15.99), ComparisonBand::BelowAverage);
        assert_eq!(ComparisonBand::classify(16.0), ComparisonBand::AboveAverage);
        assert_eq!(ComparisonBand::classify(f64::INFINITY), ComparisonBand::AboveAverage);
    }

    #[test]
    fn fills_are_capped() {
        assert_eq!(gauge_fill_percent(10.0), 50.0);
        assert_eq!(gauge_fill_percent(45.0), 100.0);
        assert_eq!(category_fill_percent(2.5), 50.0);
        assert_eq!(category_fill_percent(12.0), 100.0);
    }

    #[test]
    fn waste_tips_match_calculator_page() {
        assert_eq!(
            reduction_tips(Category::Waste),
            &[
                "Recycle paper, plastic, glass, and metal",
                "Compost food scraps and yard waste",
                "Reduce single-use plastics",
                "Buy less, reuse more",
            ]
        );
        assert_eq!(reduction_tips(Category::Consumption), &["Buy less, reuse more"]);
    }

    #[test]
    fn negative_half_shares_round_up() {
        use crate::estimator::{EmissionBreakdown, EstimatorOutput};
        let tons = EmissionBreakdown {
            waste: -2.5,
            food: 102.0,
            total: 100.0,
            ..EmissionBreakdown::default()
        };
        let output = EstimatorOutput { pounds: tons, metric_tons: tons };
        assert_eq!(category_share_percent(&output, Category::Waste), Some(-2));
        assert_eq!(category_share_percent(&output, Category::Food), Some(102));
    }

    #[test]
    fn every_category_has_tips() {
        for category in Category::ALL {
            assert!(!reduction_tips(category).is_empty());
        }
    }
}
