//! Compare the distribution of a spreadsheet column against a reference
//! normal distribution, rendered as a histogram with two density curves.

pub mod analysis;
pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod plot;
pub mod stats;
pub mod workbook;

#[cfg(test)]
mod tests;

pub use api::*;
pub use error::*;

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber; `RUST_LOG` overrides the default
/// `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
