//! JSON request handling for the `land_calc` binary
//!
//! One request document in, one response document out.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::build_info::BuildInfo;
use crate::config::Config;
use crate::error::{LandError, LandResult};
use crate::form::{AreaCalculator, FormEvaluation, FormTrigger};
use crate::models::{Plot, PlotCreate};
use crate::validation::ValidationViolation;

/// Request read from stdin
#[derive(Debug, Deserialize)]
pub struct FormRequest {
    /// Trigger name or the name of the field that changed
    pub trigger: String,
    /// Raw form fields; strings and numbers are both accepted
    #[serde(default)]
    pub fields: serde_json::Map<String, Value>,
    /// Plot to value at government and market rates
    #[serde(default)]
    pub plot: Option<PlotCreate>,
}

/// Plot with its derived values and range violations
#[derive(Debug, Serialize)]
pub struct PlotResponse {
    #[serde(flatten)]
    pub plot: Plot,
    pub area_display: String,
    pub violations: Vec<ValidationViolation>,
}

/// Response written to stdout
#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub build: BuildInfo,
    pub evaluation: FormEvaluation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<PlotResponse>,
}

/// Evaluate one JSON request
pub fn handle_request(input: &str, config: &Config) -> LandResult<FormResponse> {
    let request: FormRequest = serde_json::from_str(input)?;

    let trigger = FormTrigger::from_str(&request.trigger)
        .ok_or_else(|| LandError::UnknownTrigger(request.trigger.clone()))?;

    let evaluation = AreaCalculator::new(&request.fields).evaluate(trigger);

    let plot = request.plot.map(|data| {
        let plot = Plot::create(data, &config.weights);
        PlotResponse {
            area_display: plot.area_display(),
            violations: plot.validate(),
            plot,
        }
    });

    tracing::info!(
        "Handled {} request ({} violation(s))",
        trigger.as_str(),
        evaluation.violations.len()
    );

    Ok(FormResponse {
        build: BuildInfo::current(),
        evaluation,
        plot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_bigha_request() {
        let input = r#"{
            "trigger": "kattha",
            "fields": {"bigha": 1, "kattha": "0", "dhur": "", "market_rate_per_sqft": 100}
        }"#;
        let response = handle_request(input, &Config::default()).unwrap();
        let eval = response.evaluation;
        assert_eq!(eval.trigger, FormTrigger::Bigha);
        assert_eq!(eval.area.unwrap().sqft, 72900.0);
        assert_eq!(eval.valuation.unwrap().fair_market_value, 7_290_000.0);
        assert!(response.plot.is_none());
    }

    #[test]
    fn test_handle_plot_request() {
        let input = r#"{
            "trigger": "area",
            "fields": {},
            "plot": {
                "plot_number": "12",
                "ropani": {"ropani": 1, "ana": 16, "paisa": 0, "dam": 0},
                "gov_rate_per_sqft": 100,
                "market_rate_per_sqft": 100
            }
        }"#;
        let response = handle_request(input, &Config::default()).unwrap();
        let plot = response.plot.unwrap();
        assert_eq!(plot.plot.area.sqft, 10952.0);
        assert!((plot.plot.valuation.fair_market_value - 1_095_200.0).abs() < 1e-6);
        assert_eq!(plot.area_display, "1-16-0-0 (R-A-P-D)");
        assert_eq!(plot.violations.len(), 1);
        assert_eq!(plot.violations[0].field, "ana");
    }

    #[test]
    fn test_response_serializes() {
        let input = r#"{"trigger": "ropani", "fields": {"ropani": "2"}}"#;
        let response = handle_request(input, &Config::default()).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["evaluation"]["updates"]["area_sqft"], "10952.00");
        assert_eq!(json["evaluation"]["trigger"], "ropani");
        assert!(json.get("plot").is_none());
    }

    #[test]
    fn test_unknown_trigger() {
        let err = handle_request(r#"{"trigger": "acres"}"#, &Config::default()).unwrap_err();
        assert!(matches!(err, LandError::UnknownTrigger(ref t) if t == "acres"));
    }

    #[test]
    fn test_invalid_json() {
        let err = handle_request("not json", &Config::default()).unwrap_err();
        assert!(matches!(err, LandError::Json(_)));
    }
}
