//! Nepali Land Calculator
//!
//! Reads one form request as JSON on stdin and writes the evaluation as JSON
//! on stdout.

use std::io::{self, Read, Write};

use nepali_land::build_info;
use nepali_land::config::Config;
use nepali_land::stdio::handle_request;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_directive.parse()?))
        .with_writer(io::stderr)
        .init();

    build_info::print_startup_banner();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let response = handle_request(&input, &config)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &response)?;
    writeln!(stdout)?;

    Ok(())
}
