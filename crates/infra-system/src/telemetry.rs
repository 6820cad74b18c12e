//! Diagnostics logging setup shared by the binaries
//!
//! Logs go to stderr so they never mix with console text on stdout.
//! `RUST_LOG` overrides the filter; `IPB_LOG_FORMAT=json` switches to JSON lines.

use ipb_core::{AppError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Only warnings and errors from our own crates unless `RUST_LOG` says otherwise
pub const DEFAULT_FILTER: &str = "ipb=warn";

pub fn init_logging() -> Result<()> {
    let log_format = std::env::var("IPB_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|e| AppError::Config(format!("invalid log filter: {}", e)))?;

    let installed = match log_format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    installed.map_err(|e| AppError::Internal(format!("tracing subscriber: {}", e)))
}
