//! Valuation calculations
//!
//! Fair market value for the form, and the government/market breakdown
//! stored with each plot.

use serde::{Deserialize, Serialize};

use crate::config::ValuationWeights;

/// Fair market value of an area at a per-sqft market rate
///
/// Returns 0 unless both inputs are positive.
pub fn calculate_fair_market_value(area_sqft: f64, market_rate: f64) -> f64 {
    // NaN fails both comparisons and falls through to 0
    if area_sqft > 0.0 && market_rate > 0.0 {
        area_sqft * market_rate
    } else {
        0.0
    }
}

/// Area, rate and resulting value, shown under the form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationSummary {
    pub area_sqft: f64,
    pub market_rate_per_sqft: f64,
    pub fair_market_value: f64,
}

impl ValuationSummary {
    /// Summary for a positive area and rate, None otherwise
    pub fn calculate(area_sqft: f64, market_rate: f64) -> Option<Self> {
        if area_sqft > 0.0 && market_rate > 0.0 {
            Some(Self {
                area_sqft,
                market_rate_per_sqft: market_rate,
                fair_market_value: calculate_fair_market_value(area_sqft, market_rate),
            })
        } else {
            None
        }
    }
}

/// Government, market and weighted fair market value of a plot
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotValuation {
    pub gov_value: f64,
    pub market_value: f64,
    pub fair_market_value: f64,
}

impl PlotValuation {
    /// Value an area at the given government and market rates
    ///
    /// The fair market value uses the blended rate from `weights`. Non-positive
    /// areas value to zero; missing rates count as zero.
    pub fn calculate(
        area_sqft: f64,
        gov_rate: f64,
        market_rate: f64,
        weights: &ValuationWeights,
    ) -> Self {
        if area_sqft.is_nan() || area_sqft <= 0.0 {
            return Self::default();
        }

        let gov_rate = positive_or_zero(gov_rate);
        let market_rate = positive_or_zero(market_rate);

        let fair_market_value = if gov_rate > 0.0 || market_rate > 0.0 {
            area_sqft * weights.blend(gov_rate, market_rate)
        } else {
            0.0
        };

        Self {
            gov_value: area_sqft * gov_rate,
            market_value: area_sqft * market_rate,
            fair_market_value,
        }
    }
}

fn positive_or_zero(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fair_market_value() {
        assert_eq!(calculate_fair_market_value(1000.0, 5000.0), 5_000_000.0);
    }

    #[test]
    fn test_fair_market_value_non_positive_inputs() {
        assert_eq!(calculate_fair_market_value(0.0, 5000.0), 0.0);
        assert_eq!(calculate_fair_market_value(1000.0, -1.0), 0.0);
        assert_eq!(calculate_fair_market_value(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn test_summary() {
        let summary = ValuationSummary::calculate(5476.0, 2000.0).unwrap();
        assert_eq!(summary.fair_market_value, 10_952_000.0);
        assert!(ValuationSummary::calculate(5476.0, 0.0).is_none());
    }

    #[test]
    fn test_plot_valuation_weighted() {
        let v = PlotValuation::calculate(1000.0, 1000.0, 2000.0, &ValuationWeights::default());
        assert_eq!(v.gov_value, 1_000_000.0);
        assert_eq!(v.market_value, 2_000_000.0);
        assert!((v.fair_market_value - 1_700_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_plot_valuation_market_only() {
        let v = PlotValuation::calculate(100.0, 0.0, 500.0, &ValuationWeights::default());
        assert_eq!(v.gov_value, 0.0);
        assert!((v.fair_market_value - 35_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_plot_valuation_zero_area() {
        let v = PlotValuation::calculate(0.0, 1000.0, 2000.0, &ValuationWeights::default());
        assert_eq!(v, PlotValuation::default());
    }

    #[test]
    fn test_plot_valuation_no_rates() {
        let v = PlotValuation::calculate(500.0, 0.0, 0.0, &ValuationWeights::default());
        assert_eq!(v, PlotValuation::default());
    }
}
