//! Area conversion functions
//!
//! Converts between the Ropani and Bigha systems, square feet and square meters.
//! Every function here is pure; non-finite inputs are treated as zero.

use serde::{Deserialize, Serialize};

use super::units::{
    sqft_per_unit, LandSystem, SQFT_PER_ANA, SQFT_PER_BIGHA, SQFT_PER_DAM, SQFT_PER_DHUR,
    SQFT_PER_KATTHA, SQFT_PER_PAISA, SQFT_PER_ROPANI, SQMT_PER_SQFT,
};
use crate::models::{Area, BighaMeasurement, RopaniMeasurement};

/// Relative tolerance, scaled by the total area, within which a remainder
/// counts as a whole number of units. Float error in a sum of unit counts grows
/// with the size of the sum, so the tolerance does too.
const SNAP_RELATIVE: f64 = 1e-13;

/// Result of converting a square-foot area into a chosen system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "system", rename_all = "lowercase")]
pub enum ConvertedArea {
    Ropani(RopaniMeasurement),
    Bigha(BighaMeasurement),
    Metric(Area),
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Area to decompose: non-finite and negative inputs become zero
fn decomposable(sqft: f64) -> f64 {
    if !sqft.is_finite() || sqft < 0.0 {
        tracing::debug!("Cannot decompose area {}; using 0", sqft);
        return 0.0;
    }
    sqft
}

/// Snap tolerance in square feet for decomposing `total`
fn snap_tolerance(total: f64) -> f64 {
    total.max(1.0) * SNAP_RELATIVE
}

/// Whole number of `unit` contained in `value`, and what is left over
///
/// A value within `tolerance` square feet of a whole number of units is taken
/// as exactly that many.
fn split_units(value: f64, unit: f64, tolerance: f64) -> (f64, f64) {
    let quotient = value / unit;
    let nearest = quotient.round();
    let whole = if (value - nearest * unit).abs() <= tolerance {
        nearest
    } else {
        quotient.floor()
    };
    let remainder = (value - whole * unit).max(0.0);
    (whole, remainder)
}

/// Move a rounded-up full unit into the next larger unit
fn carry(small: &mut f64, large: &mut f64, per_large: f64) {
    if *small >= per_large {
        *small -= per_large;
        *large += 1.0;
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Total square feet of a Ropani-Ana-Paisa-Dam measurement
pub fn ropani_to_sqft(ropani: f64, ana: f64, paisa: f64, dam: f64) -> f64 {
    finite_or_zero(ropani) * SQFT_PER_ROPANI
        + finite_or_zero(ana) * SQFT_PER_ANA
        + finite_or_zero(paisa) * SQFT_PER_PAISA
        + finite_or_zero(dam) * SQFT_PER_DAM
}

/// Total square feet of a Bigha-Kattha-Dhur measurement
pub fn bigha_to_sqft(bigha: f64, kattha: f64, dhur: f64) -> f64 {
    finite_or_zero(bigha) * SQFT_PER_BIGHA
        + finite_or_zero(kattha) * SQFT_PER_KATTHA
        + finite_or_zero(dhur) * SQFT_PER_DHUR
}

pub fn sqft_to_sqmt(sqft: f64) -> f64 {
    finite_or_zero(sqft) * SQMT_PER_SQFT
}

pub fn sqmt_to_sqft(sqmt: f64) -> f64 {
    finite_or_zero(sqmt) / SQMT_PER_SQFT
}

/// Decompose square feet into whole ropani, ana and paisa plus fractional dam
///
/// Dam is kept to 4 decimal places.
pub fn sqft_to_ropani(sqft: f64) -> RopaniMeasurement {
    let sqft = decomposable(sqft);
    let tolerance = snap_tolerance(sqft);

    let (ropani, rest) = split_units(sqft, SQFT_PER_ROPANI, tolerance);
    let (ana, rest) = split_units(rest, SQFT_PER_ANA, tolerance);
    let (mut paisa, rest) = split_units(rest, SQFT_PER_PAISA, tolerance);
    let mut dam = round_to(rest / SQFT_PER_DAM, 4);

    // 4 dam is exactly 1 paisa; 4 paisa falls 0.01 sq.ft short of an ana and
    // stays as paisa
    carry(&mut dam, &mut paisa, 4.0);

    RopaniMeasurement {
        ropani,
        ana,
        paisa,
        dam,
    }
}

/// Decompose square feet into whole bigha and kattha plus fractional dhur
///
/// Dhur is kept to 2 decimal places.
pub fn sqft_to_bigha(sqft: f64) -> BighaMeasurement {
    let sqft = decomposable(sqft);
    let tolerance = snap_tolerance(sqft);

    let (mut bigha, rest) = split_units(sqft, SQFT_PER_BIGHA, tolerance);
    let (mut kattha, rest) = split_units(rest, SQFT_PER_KATTHA, tolerance);
    let mut dhur = round_to(rest / SQFT_PER_DHUR, 2);

    carry(&mut dhur, &mut kattha, 20.0);
    carry(&mut kattha, &mut bigha, 20.0);

    BighaMeasurement {
        bigha,
        kattha,
        dhur,
    }
}

/// Express a square-foot area in the requested system
pub fn convert_area(sqft: f64, to_system: LandSystem) -> ConvertedArea {
    match to_system {
        LandSystem::Ropani => ConvertedArea::Ropani(sqft_to_ropani(sqft)),
        LandSystem::Bigha => ConvertedArea::Bigha(sqft_to_bigha(sqft)),
        LandSystem::Metric => ConvertedArea::Metric(Area::from_sqft(sqft)),
    }
}

/// Convert a quantity in the given unit to square feet
///
/// Returns None for units that are not area units.
pub fn to_sqft(quantity: f64, unit: &str) -> Option<f64> {
    sqft_per_unit(unit).map(|factor| finite_or_zero(quantity) * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_one_ropani() {
        assert_eq!(ropani_to_sqft(1.0, 0.0, 0.0, 0.0), 5476.0);
    }

    #[test]
    fn test_ropani_sub_units_sum() {
        let expected = 15.0 * 342.25 + 3.0 * 85.56 + 4.0 * 21.39;
        assert!(approx(ropani_to_sqft(0.0, 15.0, 3.0, 4.0), expected, 1e-9));
        assert!(approx(expected, 5475.99, 1e-9));
    }

    #[test]
    fn test_non_finite_inputs_count_as_zero() {
        assert_eq!(ropani_to_sqft(f64::NAN, 1.0, 0.0, 0.0), 342.25);
        assert_eq!(bigha_to_sqft(1.0, f64::INFINITY, 0.0), 72900.0);
        assert_eq!(sqft_to_sqmt(f64::NAN), 0.0);
    }

    #[test]
    fn test_one_bigha() {
        assert_eq!(bigha_to_sqft(1.0, 0.0, 0.0), 72900.0);
        assert_eq!(bigha_to_sqft(0.0, 1.0, 1.0), 3645.0 + 182.25);
    }

    #[test]
    fn test_sqft_to_sqmt() {
        assert!(approx(sqft_to_sqmt(5476.0), 508.74, 0.01));
        assert!(approx(sqmt_to_sqft(sqft_to_sqmt(1234.5)), 1234.5, 1e-9));
    }

    const LARGE_COUNTS: [f64; 9] = [
        0.0, 1.0, 7.0, 123.0, 12345.0, 99999.0, 1e6, 7654321.0, 1e7,
    ];

    #[test]
    fn test_sqft_to_ropani_round_trip() {
        for ropani in LARGE_COUNTS {
            for ana in 0..16 {
                for paisa in 0..4 {
                    for dam in 0..4 {
                        let (ana, paisa, dam) = (ana as f64, paisa as f64, dam as f64);
                        let sqft = ropani_to_sqft(ropani, ana, paisa, dam);
                        let m = sqft_to_ropani(sqft);
                        assert_eq!(m.ropani, ropani, "ropani for {}", sqft);
                        assert_eq!(m.ana, ana, "ana for {}", sqft);
                        assert_eq!(m.paisa, paisa, "paisa for {}", sqft);
                        assert!(approx(m.dam, dam, 1e-3), "dam for {}", sqft);
                    }
                }
            }
        }
    }

    #[test]
    fn test_sqft_to_ropani_million_ropani() {
        let m = sqft_to_ropani(ropani_to_sqft(1e6, 0.0, 2.0, 0.0));
        assert_eq!((m.ropani, m.ana, m.paisa), (1e6, 0.0, 2.0));
        assert!(approx(m.dam, 0.0, 1e-3));
    }

    #[test]
    fn test_sqft_to_bigha_round_trip() {
        for bigha in LARGE_COUNTS {
            for kattha in 0..20 {
                for dhur in 0..20 {
                    let (kattha, dhur) = (kattha as f64, dhur as f64);
                    let sqft = bigha_to_sqft(bigha, kattha, dhur);
                    let m = sqft_to_bigha(sqft);
                    assert_eq!(m.bigha, bigha, "bigha for {}", sqft);
                    assert_eq!(m.kattha, kattha, "kattha for {}", sqft);
                    assert!(approx(m.dhur, dhur, 1e-2), "dhur for {}", sqft);
                }
            }
        }
    }

    #[test]
    fn test_rounded_dam_carries_into_paisa() {
        let m = sqft_to_ropani(85.559999);
        assert_eq!((m.ropani, m.ana, m.paisa, m.dam), (0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn test_four_paisa_stays_below_an_ana() {
        let m = sqft_to_ropani(4.0 * SQFT_PER_PAISA);
        assert_eq!((m.ropani, m.ana, m.paisa), (0.0, 0.0, 4.0));
        assert!(approx(m.dam, 0.0, 1e-9));
    }

    #[test]
    fn test_rounded_dhur_carries_into_kattha() {
        let m = sqft_to_bigha(3644.999);
        assert_eq!((m.bigha, m.kattha, m.dhur), (0.0, 1.0, 0.0));
    }

    #[test]
    fn test_sqft_to_ropani_fractional_dam() {
        let m = sqft_to_ropani(ropani_to_sqft(2.0, 3.0, 1.0, 2.5));
        assert_eq!((m.ropani, m.ana, m.paisa), (2.0, 3.0, 1.0));
        assert!(approx(m.dam, 2.5, 1e-4));
    }

    #[test]
    fn test_sqft_to_bigha() {
        let m = sqft_to_bigha(bigha_to_sqft(3.0, 12.0, 7.0));
        assert_eq!((m.bigha, m.kattha), (3.0, 12.0));
        assert!(approx(m.dhur, 7.0, 1e-2));

        let m = sqft_to_bigha(100.0);
        assert_eq!((m.bigha, m.kattha), (0.0, 0.0));
        assert_eq!(m.dhur, 0.55);
    }

    #[test]
    fn test_negative_area_decomposes_to_zero() {
        let m = sqft_to_ropani(-50.0);
        assert_eq!((m.ropani, m.ana, m.paisa, m.dam), (0.0, 0.0, 0.0, 0.0));
        let m = sqft_to_bigha(f64::NAN);
        assert_eq!((m.bigha, m.kattha, m.dhur), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_convert_area() {
        match convert_area(5476.0, LandSystem::Ropani) {
            ConvertedArea::Ropani(m) => assert_eq!(m.ropani, 1.0),
            other => panic!("unexpected {:?}", other),
        }
        match convert_area(72900.0, LandSystem::Bigha) {
            ConvertedArea::Bigha(m) => assert_eq!(m.bigha, 1.0),
            other => panic!("unexpected {:?}", other),
        }
        match convert_area(1000.0, LandSystem::Metric) {
            ConvertedArea::Metric(a) => {
                assert_eq!(a.sqft, 1000.0);
                assert!(approx(a.sqmt, 92.903, 1e-9));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_converted_area_serializes_with_system_tag() {
        let json = serde_json::to_value(convert_area(5476.0, LandSystem::Ropani)).unwrap();
        assert_eq!(json["system"], "ropani");
        assert_eq!(json["ropani"], 1.0);
    }

    #[test]
    fn test_to_sqft() {
        assert_eq!(to_sqft(2.0, "kattha"), Some(7290.0));
        assert_eq!(to_sqft(10.0, "sqft"), Some(10.0));
        assert_eq!(to_sqft(1.0, "litre"), None);
    }
}
