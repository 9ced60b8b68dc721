//! Area conversion module
//!
//! Handles the Ropani and Bigha land systems and their metric equivalents.

pub mod converter;
pub mod units;

pub use converter::{
    bigha_to_sqft, convert_area, ropani_to_sqft, sqft_to_bigha, sqft_to_ropani, sqft_to_sqmt,
    sqmt_to_sqft, to_sqft, ConvertedArea,
};
pub use units::{sqft_per_unit, LandSystem, LandUnit};
