//! IPB Launcher - Main Entry Point
//!
//! Shows the preset paths, runs the external block validator, points at the
//! result files and waits for the user.

mod settings;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use ipb_core::application::Launcher;
use ipb_core::port::time_provider::SystemTimeProvider;
use ipb_infra_system::{init_logging, StdinAcknowledger, SubprocessRunner};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "ipb-launcher")]
#[command(about = "Run the IPB block validator with preset paths", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (TOML) layered over the built-in presets
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // 1. Initialize logging
    init_logging().context("Failed to initialize logging")?;
    info!("IPB Launcher v{} starting...", VERSION);

    // 2. Load configuration
    let config = settings::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let policy = config.exit_policy;
    info!(program = %config.program, exit_policy = ?policy, "Configuration loaded");

    // 3. Wire dependencies
    let time_provider = Arc::new(SystemTimeProvider);
    let launcher = Launcher::new(
        config,
        Arc::new(SubprocessRunner::new(time_provider.clone())),
        Arc::new(StdinAcknowledger::new()),
        time_provider,
    );

    // 4. Run
    let mut stdout = std::io::stdout();
    let outcome = launcher
        .run(&mut stdout)
        .await
        .context("Launcher failed")?;

    let code = outcome.exit_code(policy);
    info!(status = ?outcome.status, exit_code = code, "Launcher finished");

    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
