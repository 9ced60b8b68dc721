//! Calculator build metadata
//!
//! Package name and version come from cargo; the compile time and profile are
//! stamped by `build.rs`.

use serde::Serialize;

const BUILT_AT: &str = match option_env!("NEPALI_LAND_BUILT_AT") {
    Some(s) => s,
    None => "unknown",
};

const PROFILE: &str = match option_env!("NEPALI_LAND_PROFILE") {
    Some(s) => s,
    None => "unknown",
};

/// Identifies which calculator build produced a response
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub profile: &'static str,
    pub built_at: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            profile: PROFILE,
            built_at: BUILT_AT,
        }
    }

    /// One-line summary, e.g. `nepali_land 1.0.0 (release, 2026-10-16T08:00:00Z)`
    pub fn summary(&self) -> String {
        format!(
            "{} {} ({}, {})",
            self.name, self.version, self.profile, self.built_at
        )
    }
}

/// Announce the calculator on stderr; stdout carries only the JSON result
pub fn print_startup_banner() {
    eprintln!("Nepali Land Calculator: {}", BuildInfo::current().summary());
}
