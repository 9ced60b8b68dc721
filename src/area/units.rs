//! Land units and conversion constants
//!
//! Provides types for the two traditional Nepali measurement systems and the
//! fixed square-foot size of every unit.

use serde::{Deserialize, Serialize};

// ============================================================================
// Ropani System Constants (to square feet)
// ============================================================================

/// Square feet per ropani
pub const SQFT_PER_ROPANI: f64 = 5476.0;
/// Square feet per ana (1/16 ropani)
pub const SQFT_PER_ANA: f64 = 342.25;
/// Square feet per paisa
pub const SQFT_PER_PAISA: f64 = 85.56;
/// Square feet per dam
pub const SQFT_PER_DAM: f64 = 21.39;

// ============================================================================
// Bigha System Constants (to square feet)
// ============================================================================

/// Square feet per bigha
pub const SQFT_PER_BIGHA: f64 = 72900.0;
/// Square feet per kattha (1/20 bigha)
pub const SQFT_PER_KATTHA: f64 = 3645.0;
/// Square feet per dhur (1/20 kattha)
pub const SQFT_PER_DHUR: f64 = 182.25;

// ============================================================================
// Metric
// ============================================================================

/// Square meters per square foot
pub const SQMT_PER_SQFT: f64 = 0.092903;

/// Measurement system an area is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandSystem {
    /// Ropani-Ana-Paisa-Dam, used in the hills
    Ropani,
    /// Bigha-Kattha-Dhur, used in the Terai plains
    Bigha,
    /// Square feet and square meters
    Metric,
}

impl LandSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            LandSystem::Ropani => "ropani",
            LandSystem::Bigha => "bigha",
            LandSystem::Metric => "metric",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ropani" | "rapd" | "r-a-p-d" | "hill" | "hilly" => Some(LandSystem::Ropani),
            "bigha" | "bkd" | "b-k-d" | "terai" => Some(LandSystem::Bigha),
            "metric" | "sqft" | "sqmt" | "international" => Some(LandSystem::Metric),
            _ => None,
        }
    }

    /// Short label used in area display strings
    pub fn label(&self) -> &'static str {
        match self {
            LandSystem::Ropani => "R-A-P-D",
            LandSystem::Bigha => "B-K-D",
            LandSystem::Metric => "Sq.Ft",
        }
    }
}

/// A single traditional land unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandUnit {
    Ropani,
    Ana,
    Paisa,
    Dam,
    Bigha,
    Kattha,
    Dhur,
}

impl LandUnit {
    /// Size of one unit in square feet
    pub fn sqft_per_unit(&self) -> f64 {
        match self {
            LandUnit::Ropani => SQFT_PER_ROPANI,
            LandUnit::Ana => SQFT_PER_ANA,
            LandUnit::Paisa => SQFT_PER_PAISA,
            LandUnit::Dam => SQFT_PER_DAM,
            LandUnit::Bigha => SQFT_PER_BIGHA,
            LandUnit::Kattha => SQFT_PER_KATTHA,
            LandUnit::Dhur => SQFT_PER_DHUR,
        }
    }

    /// The system this unit belongs to
    pub fn system(&self) -> LandSystem {
        match self {
            LandUnit::Ropani | LandUnit::Ana | LandUnit::Paisa | LandUnit::Dam => {
                LandSystem::Ropani
            }
            LandUnit::Bigha | LandUnit::Kattha | LandUnit::Dhur => LandSystem::Bigha,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LandUnit::Ropani => "ropani",
            LandUnit::Ana => "ana",
            LandUnit::Paisa => "paisa",
            LandUnit::Dam => "dam",
            LandUnit::Bigha => "bigha",
            LandUnit::Kattha => "kattha",
            LandUnit::Dhur => "dhur",
        }
    }

    /// Parse from string, accepting common spellings and plurals
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ropani" | "ropanis" => Some(LandUnit::Ropani),
            "ana" | "anas" | "aana" | "aanas" => Some(LandUnit::Ana),
            "paisa" | "paisas" => Some(LandUnit::Paisa),
            "dam" | "dams" | "daam" => Some(LandUnit::Dam),
            "bigha" | "bighas" => Some(LandUnit::Bigha),
            "kattha" | "katthas" | "katha" | "kathas" => Some(LandUnit::Kattha),
            "dhur" | "dhurs" => Some(LandUnit::Dhur),
            _ => None,
        }
    }
}

/// Get the conversion factor to square feet for any recognized area unit
///
/// Covers the traditional units plus square feet and square meters.
pub fn sqft_per_unit(unit: &str) -> Option<f64> {
    if let Some(land_unit) = LandUnit::from_str(unit) {
        return Some(land_unit.sqft_per_unit());
    }

    match unit.trim().to_lowercase().as_str() {
        "sqft" | "sq.ft" | "sq ft" | "ft2" | "square feet" => Some(1.0),
        "sqm" | "sqmt" | "sq.m" | "sq m" | "m2" | "square meters" | "square metres" => {
            Some(1.0 / SQMT_PER_SQFT)
        }
        _ => None,
    }
}
