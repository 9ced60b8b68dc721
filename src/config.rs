//! Runtime configuration
//!
//! Read from environment variables; anything unset falls back to defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weight of the government rate in the fair market value
pub const GOV_WEIGHT_VAR: &str = "NEPALI_LAND_GOV_WEIGHT";
/// Weight of the market rate in the fair market value
pub const MARKET_WEIGHT_VAR: &str = "NEPALI_LAND_MARKET_WEIGHT";
/// Extra tracing directive for the binary
pub const LOG_DIRECTIVE_VAR: &str = "NEPALI_LAND_LOG";

pub const DEFAULT_GOV_WEIGHT: f64 = 0.3;
pub const DEFAULT_MARKET_WEIGHT: f64 = 0.7;
pub const DEFAULT_LOG_DIRECTIVE: &str = "nepali_land=info";

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{var} is not a number: '{value}'")]
    NotANumber { var: &'static str, value: String },

    #[error("{var} must be between 0 and 1, got {value}")]
    OutOfRange { var: &'static str, value: f64 },
}

/// Blend of government and market rate used for a plot's fair market value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationWeights {
    pub gov: f64,
    pub market: f64,
}

impl Default for ValuationWeights {
    fn default() -> Self {
        Self {
            gov: DEFAULT_GOV_WEIGHT,
            market: DEFAULT_MARKET_WEIGHT,
        }
    }
}

impl ValuationWeights {
    /// Weighted per-sqft rate
    pub fn blend(&self, gov_rate: f64, market_rate: f64) -> f64 {
        gov_rate * self.gov + market_rate * self.market
    }
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub weights: ValuationWeights,
    pub log_directive: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: ValuationWeights::default(),
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gov = read_weight(&lookup, GOV_WEIGHT_VAR, DEFAULT_GOV_WEIGHT)?;
        let market = read_weight(&lookup, MARKET_WEIGHT_VAR, DEFAULT_MARKET_WEIGHT)?;

        let total = gov + market;
        if (total - 1.0).abs() > 1e-6 {
            tracing::warn!(
                "Valuation weights sum to {} (gov {}, market {}), not 1",
                total,
                gov,
                market
            );
        }

        let log_directive = lookup(LOG_DIRECTIVE_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());

        Ok(Self {
            weights: ValuationWeights { gov, market },
            log_directive,
        })
    }
}

fn read_weight<F>(lookup: &F, var: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = match lookup(var) {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(default),
    };

    let value: f64 = raw.trim().parse().map_err(|_| ConfigError::NotANumber {
        var,
        value: raw.clone(),
    })?;

    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::OutOfRange { var, value });
    }

    Ok(value)
}
