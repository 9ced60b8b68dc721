//! Measurement value types
//!
//! A land area expressed in one of the traditional systems, or as plain
//! square feet with its square-meter equivalent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::area::units::LandSystem;
use crate::area::{bigha_to_sqft, ropani_to_sqft, sqft_to_sqmt};

/// Ropani-Ana-Paisa-Dam measurement
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RopaniMeasurement {
    pub ropani: f64,
    pub ana: f64,   // 0-15
    pub paisa: f64, // 0-3
    pub dam: f64,   // 0-4, may be fractional
}

impl RopaniMeasurement {
    pub fn new(ropani: f64, ana: f64, paisa: f64, dam: f64) -> Self {
        Self {
            ropani,
            ana,
            paisa,
            dam,
        }
    }

    pub fn to_sqft(&self) -> f64 {
        ropani_to_sqft(self.ropani, self.ana, self.paisa, self.dam)
    }

    /// True when any component is positive
    pub fn is_set(&self) -> bool {
        self.ropani > 0.0 || self.ana > 0.0 || self.paisa > 0.0 || self.dam > 0.0
    }
}

impl fmt::Display for RopaniMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{} ({})",
            self.ropani,
            self.ana,
            self.paisa,
            self.dam,
            LandSystem::Ropani.label()
        )
    }
}

/// Bigha-Kattha-Dhur measurement
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BighaMeasurement {
    pub bigha: f64,
    pub kattha: f64, // 0-19
    pub dhur: f64,   // 0-19, may be fractional
}

impl BighaMeasurement {
    pub fn new(bigha: f64, kattha: f64, dhur: f64) -> Self {
        Self {
            bigha,
            kattha,
            dhur,
        }
    }

    pub fn to_sqft(&self) -> f64 {
        bigha_to_sqft(self.bigha, self.kattha, self.dhur)
    }

    /// True when any component is positive
    pub fn is_set(&self) -> bool {
        self.bigha > 0.0 || self.kattha > 0.0 || self.dhur > 0.0
    }
}

impl fmt::Display for BighaMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{} ({})",
            self.bigha,
            self.kattha,
            self.dhur,
            LandSystem::Bigha.label()
        )
    }
}

/// Area in square feet with the derived square-meter value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub sqft: f64,
    pub sqmt: f64,
}

impl Area {
    pub fn from_sqft(sqft: f64) -> Self {
        let sqft = if sqft.is_finite() { sqft } else { 0.0 };
        Self {
            sqft,
            sqmt: sqft_to_sqmt(sqft),
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

impl std::ops::Add for Area {
    type Output = Area;

    fn add(self, other: Area) -> Area {
        Area::from_sqft(self.sqft + other.sqft)
    }
}

impl std::iter::Sum for Area {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Area::zero(), |acc, a| acc + a)
    }
}

impl From<RopaniMeasurement> for Area {
    fn from(m: RopaniMeasurement) -> Self {
        Area::from_sqft(m.to_sqft())
    }
}

impl From<BighaMeasurement> for Area {
    fn from(m: BighaMeasurement) -> Self {
        Area::from_sqft(m.to_sqft())
    }
}
