//! Measurement and form field validation
//!
//! Violations are collected and returned, never raised.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{BighaMeasurement, RopaniMeasurement};

/// A single field failing its rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationViolation {
    pub field: String,
    pub message: String,
}

impl ValidationViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Sub-unit values to check; `None` means the field is not on the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ana: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paisa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dam: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kattha: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dhur: Option<f64>,
}

impl From<&RopaniMeasurement> for Measurements {
    fn from(m: &RopaniMeasurement) -> Self {
        Self {
            ana: Some(m.ana),
            paisa: Some(m.paisa),
            dam: Some(m.dam),
            ..Self::default()
        }
    }
}

impl From<&BighaMeasurement> for Measurements {
    fn from(m: &BighaMeasurement) -> Self {
        Self {
            kattha: Some(m.kattha),
            dhur: Some(m.dhur),
            ..Self::default()
        }
    }
}

/// Inclusive range rule for one sub-unit field
struct RangeRule {
    field: &'static str,
    label: &'static str,
    max: f64,
}

const RANGE_RULES: [RangeRule; 5] = [
    RangeRule { field: "ana", label: "Ana", max: 15.0 },
    RangeRule { field: "paisa", label: "Paisa", max: 3.0 },
    RangeRule { field: "dam", label: "Dam", max: 4.0 },
    RangeRule { field: "kattha", label: "Kattha", max: 19.0 },
    RangeRule { field: "dhur", label: "Dhur", max: 19.0 },
];

impl RangeRule {
    fn check(&self, value: Option<f64>) -> Option<ValidationViolation> {
        let value = value?;
        // NaN is never within range
        if value >= 0.0 && value <= self.max {
            return None;
        }
        Some(ValidationViolation::new(
            self.field,
            format!("{} must be between 0 and {}", self.label, self.max),
        ))
    }
}

/// Check every present sub-unit against its allowed range
///
/// Violations come back in the order ana, paisa, dam, kattha, dhur.
pub fn validate_measurements(m: &Measurements) -> Vec<ValidationViolation> {
    let values = [m.ana, m.paisa, m.dam, m.kattha, m.dhur];

    let violations: Vec<ValidationViolation> = RANGE_RULES
        .iter()
        .zip(values)
        .filter_map(|(rule, value)| rule.check(value))
        .collect();

    if !violations.is_empty() {
        tracing::debug!("{} measurement violation(s)", violations.len());
    }
    violations
}

pub fn validate_ropani(m: &RopaniMeasurement) -> Vec<ValidationViolation> {
    validate_measurements(&m.into())
}

pub fn validate_bigha(m: &BighaMeasurement) -> Vec<ValidationViolation> {
    validate_measurements(&m.into())
}

/// Messages only, in violation order
pub fn messages(violations: &[ValidationViolation]) -> Vec<String> {
    violations.iter().map(|v| v.message.clone()).collect()
}

/// Contact numbers are optional; when given they are exactly 10 digits
pub fn validate_contact_number(field: &str, contact: &str) -> Option<ValidationViolation> {
    let contact = contact.trim();
    if contact.is_empty() {
        return None;
    }
    if !contact.chars().all(|c| c.is_ascii_digit()) {
        return Some(ValidationViolation::new(
            field,
            "Contact number should contain only digits.",
        ));
    }
    if contact.len() != 10 {
        return Some(ValidationViolation::new(
            field,
            "Contact number must be 10 digits.",
        ));
    }
    None
}

/// PAN numbers are optional; when given they are exactly 10 characters
pub fn validate_pan_number(field: &str, pan: &str) -> Option<ValidationViolation> {
    let pan = pan.trim();
    if pan.is_empty() || pan.chars().count() == 10 {
        return None;
    }
    Some(ValidationViolation::new(
        field,
        "PAN number must be 10 characters.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_measurements_are_valid() {
        assert!(validate_measurements(&Measurements::default()).is_empty());
    }

    #[test]
    fn test_ana_out_of_range() {
        let m = Measurements {
            ana: Some(20.0),
            ..Default::default()
        };
        let violations = validate_measurements(&m);
        assert_eq!(messages(&violations), vec!["Ana must be between 0 and 15"]);
        assert_eq!(violations[0].field, "ana");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let m = Measurements {
            ana: Some(15.0),
            paisa: Some(3.0),
            dam: Some(4.0),
            kattha: Some(19.0),
            dhur: Some(0.0),
        };
        assert!(validate_measurements(&m).is_empty());
    }

    #[test]
    fn test_all_violations_in_order() {
        let m = Measurements {
            ana: Some(-1.0),
            paisa: Some(4.0),
            dam: Some(4.5),
            kattha: Some(20.0),
            dhur: Some(f64::NAN),
        };
        assert_eq!(
            messages(&validate_measurements(&m)),
            vec![
                "Ana must be between 0 and 15",
                "Paisa must be between 0 and 3",
                "Dam must be between 0 and 4",
                "Kattha must be between 0 and 19",
                "Dhur must be between 0 and 19",
            ]
        );
    }

    #[test]
    fn test_typed_measurements() {
        let m = RopaniMeasurement::new(3.0, 16.0, 0.0, 0.0);
        assert_eq!(messages(&validate_ropani(&m)), vec!["Ana must be between 0 and 15"]);

        let m = BighaMeasurement::new(1.0, 5.0, 25.0);
        assert_eq!(messages(&validate_bigha(&m)), vec!["Dhur must be between 0 and 19"]);
    }

    #[test]
    fn test_measurements_deserialize_absent_fields() {
        let m: Measurements = serde_json::from_str(r#"{"ana": 20}"#).unwrap();
        assert_eq!(m.ana, Some(20.0));
        assert_eq!(m.dhur, None);
    }

    #[test]
    fn test_contact_number() {
        assert_eq!(validate_contact_number("borrower_contact", ""), None);
        assert_eq!(validate_contact_number("borrower_contact", "9841000000"), None);
        assert_eq!(
            validate_contact_number("borrower_contact", "98410-0000")
                .unwrap()
                .message,
            "Contact number should contain only digits."
        );
        assert_eq!(
            validate_contact_number("contact_number", "98410").unwrap().message,
            "Contact number must be 10 digits."
        );
    }

    #[test]
    fn test_pan_number() {
        assert_eq!(validate_pan_number("borrower_pan", ""), None);
        assert_eq!(validate_pan_number("borrower_pan", "ABCDE1234F"), None);
        let v = validate_pan_number("borrower_pan", "12345").unwrap();
        assert_eq!(v.field, "borrower_pan");
        assert_eq!(v.to_string(), "PAN number must be 10 characters.");
    }
}
