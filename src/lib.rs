//! Nepali Land Library
//!
//! Area conversion between the Ropani and Bigha systems, square feet and
//! square meters, with plot valuation and form validation.

pub mod area;
pub mod build_info;
pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod models;
pub mod report;
pub mod stdio;
pub mod validation;
pub mod valuation;

pub use area::{
    bigha_to_sqft, convert_area, ropani_to_sqft, sqft_to_bigha, sqft_to_ropani, sqft_to_sqmt,
};
pub use error::{LandError, LandResult};
pub use validation::{validate_measurements, Measurements, ValidationViolation};
pub use valuation::calculate_fair_market_value;
