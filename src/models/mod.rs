//! Data models
//!
//! Measurements, plots and properties.

mod measurement;
mod plot;
mod property;

pub use measurement::{Area, BighaMeasurement, RopaniMeasurement};
pub use plot::{Boundaries, Plot, PlotCreate};
pub use property::{total_valuation, LandType, Property};
