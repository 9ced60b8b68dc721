//! Form boundary
//!
//! The valuation form is reached only through [`FormDataProvider`]: raw field
//! values in, plain computed data out. Parsing is permissive; anything that is
//! not a number reads as zero.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::area::{sqft_to_bigha, sqft_to_ropani};
use crate::format::{fixed2, format_currency, group_thousands, round2};
use crate::models::{Area, BighaMeasurement, RopaniMeasurement};
use crate::validation::{validate_measurements, Measurements, ValidationViolation};
use crate::valuation::ValuationSummary;

/// Source of raw form input
pub trait FormDataProvider {
    /// Raw text of a field; None when the field is not on the form
    fn field(&self, name: &str) -> Option<String>;
}

impl FormDataProvider for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FormDataProvider for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FormDataProvider for serde_json::Map<String, Value> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
    }
}

/// Named fields of the plot form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Ropani,
    Ana,
    Paisa,
    Dam,
    Bigha,
    Kattha,
    Dhur,
    AreaSqft,
    AreaSqmt,
    GovRatePerSqft,
    MarketRatePerSqft,
    FairMarketValue,
}

impl FormField {
    pub const ROPANI_GROUP: [FormField; 4] = [
        FormField::Ropani,
        FormField::Ana,
        FormField::Paisa,
        FormField::Dam,
    ];
    pub const BIGHA_GROUP: [FormField; 3] = [FormField::Bigha, FormField::Kattha, FormField::Dhur];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Ropani => "ropani",
            FormField::Ana => "ana",
            FormField::Paisa => "paisa",
            FormField::Dam => "dam",
            FormField::Bigha => "bigha",
            FormField::Kattha => "kattha",
            FormField::Dhur => "dhur",
            FormField::AreaSqft => "area_sqft",
            FormField::AreaSqmt => "area_sqmt",
            FormField::GovRatePerSqft => "gov_rate_per_sqft",
            FormField::MarketRatePerSqft => "market_rate_per_sqft",
            FormField::FairMarketValue => "fair_market_value",
        }
    }

    /// Parse a field name, with or without the `id_` element prefix
    pub fn from_str(s: &str) -> Option<Self> {
        let name = s.trim();
        let name = name.strip_prefix("id_").unwrap_or(name);
        match name.to_lowercase().as_str() {
            "ropani" => Some(FormField::Ropani),
            "ana" => Some(FormField::Ana),
            "paisa" => Some(FormField::Paisa),
            "dam" => Some(FormField::Dam),
            "bigha" => Some(FormField::Bigha),
            "kattha" => Some(FormField::Kattha),
            "dhur" => Some(FormField::Dhur),
            "area_sqft" => Some(FormField::AreaSqft),
            "area_sqmt" => Some(FormField::AreaSqmt),
            "gov_rate_per_sqft" => Some(FormField::GovRatePerSqft),
            "market_rate_per_sqft" => Some(FormField::MarketRatePerSqft),
            "fair_market_value" => Some(FormField::FairMarketValue),
            _ => None,
        }
    }

    /// HTML element id of the input
    pub fn element_id(&self) -> String {
        format!("id_{}", self.as_str())
    }
}

/// Which input changed and so which recalculation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormTrigger {
    /// Any of ropani, ana, paisa, dam
    Ropani,
    /// Any of bigha, kattha, dhur
    Bigha,
    /// The square-foot area typed directly
    Area,
    /// The market rate per square foot
    MarketRate,
}

impl FormTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormTrigger::Ropani => "ropani",
            FormTrigger::Bigha => "bigha",
            FormTrigger::Area => "area",
            FormTrigger::MarketRate => "market_rate",
        }
    }

    /// Parse a trigger name or the name of the field that changed
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "area" => return Some(FormTrigger::Area),
            "market_rate" => return Some(FormTrigger::MarketRate),
            _ => {}
        }
        FormField::from_str(s).and_then(FormTrigger::for_field)
    }

    /// Trigger fired by editing a field; derived outputs fire nothing
    pub fn for_field(field: FormField) -> Option<Self> {
        match field {
            FormField::Ropani | FormField::Ana | FormField::Paisa | FormField::Dam => {
                Some(FormTrigger::Ropani)
            }
            FormField::Bigha | FormField::Kattha | FormField::Dhur => Some(FormTrigger::Bigha),
            FormField::AreaSqft => Some(FormTrigger::Area),
            FormField::MarketRatePerSqft => Some(FormTrigger::MarketRate),
            FormField::AreaSqmt | FormField::GovRatePerSqft | FormField::FairMarketValue => None,
        }
    }
}

// ============================================================================
// Permissive Parsing
// ============================================================================

/// Longest leading decimal number in `s` (sign, digits, fraction, exponent)
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if j > frac_start || digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return "";
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    &s[..i]
}

/// Read a decimal the way a browser form does: leading number or 0
///
/// `"12.5 ropani"` reads as 12.5; `""`, `"abc"` and overflowing values read as 0.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let value = numeric_prefix(trimmed)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite());

    match value {
        Some(v) => v,
        None => {
            if !trimmed.is_empty() {
                tracing::debug!("Non-numeric input '{}' read as 0", raw);
            }
            0.0
        }
    }
}

/// Read a whole number: leading integer digits or 0 (`"12.7"` reads as 12)
pub fn parse_integer(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut i = 0;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }

    if i == digits_start {
        if !trimmed.is_empty() {
            tracing::debug!("Non-integer input '{}' read as 0", raw);
        }
        return 0.0;
    }

    trimmed[..i]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

// ============================================================================
// Calculator
// ============================================================================

/// Result of one recalculation, ready for the UI layer to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormEvaluation {
    pub trigger: FormTrigger,
    /// Area computed by this recalculation, if any
    pub area: Option<Area>,
    /// Current area expressed in both traditional systems
    pub ropani: Option<RopaniMeasurement>,
    pub bigha: Option<BighaMeasurement>,
    pub valuation: Option<ValuationSummary>,
    pub violations: Vec<ValidationViolation>,
    /// Values to write back, keyed by field name, two decimals
    pub updates: BTreeMap<String, String>,
    /// Summary lines shown beside the form
    pub display: Vec<String>,
}

/// Recalculates derived form values from a provider's raw input
pub struct AreaCalculator<'a, P: FormDataProvider + ?Sized> {
    form: &'a P,
}

impl<'a, P: FormDataProvider + ?Sized> AreaCalculator<'a, P> {
    pub fn new(form: &'a P) -> Self {
        Self { form }
    }

    fn has(&self, field: FormField) -> bool {
        self.form.field(field.as_str()).is_some()
    }

    fn has_any(&self, fields: &[FormField]) -> bool {
        fields.iter().any(|f| self.has(*f))
    }

    /// Decimal value of a field; absent or malformed fields read as 0
    pub fn value(&self, field: FormField) -> f64 {
        self.form
            .field(field.as_str())
            .map(|raw| parse_number(&raw))
            .unwrap_or(0.0)
    }

    pub fn ropani_measurement(&self) -> RopaniMeasurement {
        RopaniMeasurement::new(
            self.value(FormField::Ropani),
            self.value(FormField::Ana),
            self.value(FormField::Paisa),
            self.value(FormField::Dam),
        )
    }

    pub fn bigha_measurement(&self) -> BighaMeasurement {
        BighaMeasurement::new(
            self.value(FormField::Bigha),
            self.value(FormField::Kattha),
            self.value(FormField::Dhur),
        )
    }

    /// Area from the Ropani fields, when the form has them and it is positive
    pub fn calculate_from_ropani(&self) -> Option<Area> {
        if !self.has_any(&FormField::ROPANI_GROUP) {
            return None;
        }
        let sqft = self.ropani_measurement().to_sqft();
        (sqft > 0.0).then(|| Area::from_sqft(sqft))
    }

    /// Area from the Bigha fields, when the form has them and it is positive
    pub fn calculate_from_bigha(&self) -> Option<Area> {
        if !self.has_any(&FormField::BIGHA_GROUP) {
            return None;
        }
        let sqft = self.bigha_measurement().to_sqft();
        (sqft > 0.0).then(|| Area::from_sqft(sqft))
    }

    /// Area from the square-foot field, when positive
    pub fn calculate_from_sqft(&self) -> Option<Area> {
        let sqft = self.value(FormField::AreaSqft);
        (sqft > 0.0).then(|| Area::from_sqft(sqft))
    }

    /// Valuation of `area_sqft` at the form's market rate
    ///
    /// None when the form has no market rate field or either value is not positive.
    pub fn calculate_valuation(&self, area_sqft: f64) -> Option<ValuationSummary> {
        if !self.has(FormField::MarketRatePerSqft) {
            return None;
        }
        ValuationSummary::calculate(area_sqft, self.value(FormField::MarketRatePerSqft))
    }

    /// Sub-unit values present on the form
    ///
    /// Whole-number fields read their integer part; dam keeps its fraction.
    pub fn measurements(&self) -> Measurements {
        let integer = |field: FormField| self.form.field(field.as_str()).map(|raw| parse_integer(&raw));
        Measurements {
            ana: integer(FormField::Ana),
            paisa: integer(FormField::Paisa),
            dam: self
                .form
                .field(FormField::Dam.as_str())
                .map(|raw| parse_number(&raw)),
            kattha: integer(FormField::Kattha),
            dhur: integer(FormField::Dhur),
        }
    }

    pub fn validate(&self) -> Vec<ValidationViolation> {
        validate_measurements(&self.measurements())
    }

    /// Run the recalculation for `trigger`
    pub fn evaluate(&self, trigger: FormTrigger) -> FormEvaluation {
        let area = match trigger {
            FormTrigger::Ropani => self.calculate_from_ropani(),
            FormTrigger::Bigha => self.calculate_from_bigha(),
            FormTrigger::Area | FormTrigger::MarketRate => self.calculate_from_sqft(),
        };

        // A recalculated area is written back at two decimals, and everything
        // downstream reads that written value
        let current_sqft = match area {
            Some(a) if matches!(trigger, FormTrigger::Ropani | FormTrigger::Bigha) => {
                round2(a.sqft)
            }
            Some(a) => a.sqft,
            None => self.value(FormField::AreaSqft),
        };
        let valuation = self.calculate_valuation(current_sqft);

        let mut updates = BTreeMap::new();
        if let Some(a) = area {
            if trigger != FormTrigger::Area && trigger != FormTrigger::MarketRate {
                updates.insert(FormField::AreaSqft.as_str().to_string(), fixed2(a.sqft));
            }
            updates.insert(FormField::AreaSqmt.as_str().to_string(), fixed2(a.sqmt));
        }
        if let Some(v) = valuation {
            updates.insert(
                FormField::FairMarketValue.as_str().to_string(),
                fixed2(v.fair_market_value),
            );
        }

        let (ropani, bigha) = if current_sqft > 0.0 {
            (Some(sqft_to_ropani(current_sqft)), Some(sqft_to_bigha(current_sqft)))
        } else {
            (None, None)
        };

        let display = self.display_lines(current_sqft, valuation.as_ref());
        let violations = self.validate();

        tracing::debug!(
            "Evaluated {} trigger: area {} sqft, {} violation(s)",
            trigger.as_str(),
            current_sqft,
            violations.len()
        );

        FormEvaluation {
            trigger,
            area,
            ropani,
            bigha,
            valuation,
            violations,
            updates,
            display,
        }
    }

    fn display_lines(&self, area_sqft: f64, valuation: Option<&ValuationSummary>) -> Vec<String> {
        let mut lines = Vec::new();

        let ropani = self.ropani_measurement();
        if ropani.is_set() {
            lines.push(format!("Ropani System: {}", ropani));
        }
        let bigha = self.bigha_measurement();
        if bigha.is_set() {
            lines.push(format!("Bigha System: {}", bigha));
        }

        let area = Area::from_sqft(area_sqft);
        lines.push(format!(
            "Total Area: {} sq.ft ({} sq.m)",
            group_thousands(area.sqft),
            group_thousands(area.sqmt)
        ));

        if let Some(v) = valuation {
            lines.push(format!(
                "Market Rate: {}/sq.ft",
                format_currency(v.market_rate_per_sqft)
            ));
            lines.push(format!(
                "Fair Market Value: {}",
                format_currency(v.fair_market_value)
            ));
        }

        lines
    }
}
