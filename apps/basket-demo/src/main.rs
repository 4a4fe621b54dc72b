//! # basket-demo Entry Point
//!
//! Runs the scripted shopping session and prints each cart to stdout.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, on stderr)
//! 2. Run the demo script with UUID ids
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show every cart mutation
//! - `RUST_LOG=basket_core=trace` - Include no-op removals
//! - Default: INFO, DEBUG for basket crates

use std::io;

use basket_core::UuidGenerator;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting basket demo");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    basket_demo::run(&UuidGenerator, &mut out)?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only the cart listings.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,basket_core=debug,basket_demo=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
