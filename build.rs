//! Build script for nepali_land
//!
//! Stamps the binary with its compile time and cargo profile. Nothing is
//! written to the source tree.

fn main() {
    println!("cargo:rerun-if-changed=src");

    let built_at = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=NEPALI_LAND_BUILT_AT={}", built_at);
    println!("cargo:rustc-env=NEPALI_LAND_PROFILE={}", profile);
}
