//! Plot model
//!
//! A single land parcel measured in either (or both) traditional systems and
//! valued at government and market rates.

use serde::{Deserialize, Serialize};

use super::measurement::{Area, BighaMeasurement, RopaniMeasurement};
use crate::config::ValuationWeights;
use crate::format::group_thousands;
use crate::valuation::PlotValuation;
use crate::validation::{validate_measurements, Measurements, ValidationViolation};

/// Four sides of a plot, as named neighbours or features
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Boundaries {
    #[serde(default)]
    pub north: String,
    #[serde(default)]
    pub south: String,
    #[serde(default)]
    pub east: String,
    #[serde(default)]
    pub west: String,
}

/// Land plot with derived area and valuation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    pub plot_number: String,
    #[serde(default)]
    pub sheet_number: String,
    #[serde(default)]
    pub ropani: RopaniMeasurement,
    #[serde(default)]
    pub bigha: BighaMeasurement,
    #[serde(default)]
    pub gov_rate_per_sqft: f64,
    #[serde(default)]
    pub market_rate_per_sqft: f64,
    #[serde(default)]
    pub boundaries: Boundaries,
    #[serde(default)]
    pub remarks: String,

    // Derived by recalculate()
    #[serde(default)]
    pub area: Area,
    #[serde(default)]
    pub valuation: PlotValuation,
}

/// Input for creating a plot
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlotCreate {
    pub plot_number: String,
    pub sheet_number: Option<String>,
    pub ropani: Option<RopaniMeasurement>,
    pub bigha: Option<BighaMeasurement>,
    pub gov_rate_per_sqft: Option<f64>,
    pub market_rate_per_sqft: Option<f64>,
    pub boundaries: Option<Boundaries>,
    pub remarks: Option<String>,
}

impl Plot {
    /// Build a plot and compute its area and valuation
    pub fn create(data: PlotCreate, weights: &ValuationWeights) -> Self {
        let mut plot = Self {
            plot_number: data.plot_number,
            sheet_number: data.sheet_number.unwrap_or_default(),
            ropani: data.ropani.unwrap_or_default(),
            bigha: data.bigha.unwrap_or_default(),
            gov_rate_per_sqft: data.gov_rate_per_sqft.unwrap_or(0.0),
            market_rate_per_sqft: data.market_rate_per_sqft.unwrap_or(0.0),
            boundaries: data.boundaries.unwrap_or_default(),
            remarks: data.remarks.unwrap_or_default(),
            ..Self::default()
        };
        plot.recalculate(weights);
        plot
    }

    /// Recompute the area from both systems, then the valuation
    pub fn recalculate(&mut self, weights: &ValuationWeights) {
        self.area = Area::from_sqft(self.ropani.to_sqft() + self.bigha.to_sqft());
        self.valuation = PlotValuation::calculate(
            self.area.sqft,
            self.gov_rate_per_sqft,
            self.market_rate_per_sqft,
            weights,
        );
    }

    /// Range violations across both measurement systems
    pub fn validate(&self) -> Vec<ValidationViolation> {
        validate_measurements(&Measurements {
            ana: Some(self.ropani.ana),
            paisa: Some(self.ropani.paisa),
            dam: Some(self.ropani.dam),
            kattha: Some(self.bigha.kattha),
            dhur: Some(self.bigha.dhur),
        })
    }

    /// Area as entered: Ropani if used, else Bigha, else square feet
    pub fn area_display(&self) -> String {
        if self.ropani.is_set() {
            self.ropani.to_string()
        } else if self.bigha.is_set() {
            self.bigha.to_string()
        } else {
            format!("{} Sq.Ft", group_thousands(self.area.sqft))
        }
    }
}

impl std::fmt::Display for Plot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Plot {} - {}", self.plot_number, self.area_display())
    }
}
