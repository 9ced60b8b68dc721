//! Property model
//!
//! A property groups the plots valued together in one report.

use serde::{Deserialize, Serialize};

use super::measurement::Area;
use super::plot::Plot;

/// Land use category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandType {
    #[default]
    Residential,
    Commercial,
    Agricultural,
    Forest,
    Other,
}

impl LandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LandType::Residential => "residential",
            LandType::Commercial => "commercial",
            LandType::Agricultural => "agricultural",
            LandType::Forest => "forest",
            LandType::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "residential" => Some(LandType::Residential),
            "commercial" => Some(LandType::Commercial),
            "agricultural" | "agriculture" => Some(LandType::Agricultural),
            "forest" => Some(LandType::Forest),
            "other" => Some(LandType::Other),
            _ => None,
        }
    }
}

/// Property with its plots
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub district: String,
    #[serde(default)]
    pub municipality: String,
    #[serde(default = "default_ward")]
    pub ward_no: u32,
    #[serde(default)]
    pub land_type: LandType,
    #[serde(default)]
    pub plots: Vec<Plot>,
}

fn default_ward() -> u32 {
    1
}

impl Property {
    /// Combined area of all plots
    pub fn total_area(&self) -> Area {
        self.plots.iter().map(|p| p.area).sum()
    }

    pub fn total_area_sqft(&self) -> f64 {
        self.total_area().sqft
    }

    /// Sum of the plots' fair market values
    pub fn total_value(&self) -> f64 {
        self.plots.iter().map(|p| p.valuation.fair_market_value).sum()
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.district)
    }
}

/// Total fair market value across several properties
pub fn total_valuation(properties: &[Property]) -> f64 {
    properties.iter().map(Property::total_value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValuationWeights;
    use crate::models::{BighaMeasurement, PlotCreate, RopaniMeasurement};

    fn property() -> Property {
        let weights = ValuationWeights::default();
        Property {
            name: "Family land".to_string(),
            district: "Kaski".to_string(),
            plots: vec![
                Plot::create(
                    PlotCreate {
                        plot_number: "1".to_string(),
                        ropani: Some(RopaniMeasurement::new(1.0, 0.0, 0.0, 0.0)),
                        market_rate_per_sqft: Some(100.0),
                        ..Default::default()
                    },
                    &weights,
                ),
                Plot::create(
                    PlotCreate {
                        plot_number: "2".to_string(),
                        bigha: Some(BighaMeasurement::new(0.0, 1.0, 0.0)),
                        gov_rate_per_sqft: Some(100.0),
                        ..Default::default()
                    },
                    &weights,
                ),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_totals() {
        let p = property();
        assert_eq!(p.total_area_sqft(), 5476.0 + 3645.0);
        let expected = 5476.0 * 70.0 + 3645.0 * 30.0;
        assert!((p.total_value() - expected).abs() < 1e-6);
        assert!((total_valuation(&[p.clone(), p]) - 2.0 * expected).abs() < 1e-6);
    }

    #[test]
    fn test_empty_property() {
        let p = Property::default();
        assert_eq!(p.total_area_sqft(), 0.0);
        assert_eq!(p.total_value(), 0.0);
    }

    #[test]
    fn test_land_type() {
        assert_eq!(LandType::from_str("Agriculture"), Some(LandType::Agricultural));
        assert_eq!(LandType::Forest.as_str(), "forest");
        assert_eq!(LandType::from_str("swamp"), None);
    }

    #[test]
    fn test_deserialize_defaults() {
        let p: Property = serde_json::from_str(r#"{"name": "A", "district": "Jhapa"}"#).unwrap();
        assert_eq!(p.ward_no, 1);
        assert_eq!(p.land_type, LandType::Residential);
        assert_eq!(p.to_string(), "A - Jhapa");
    }
}
