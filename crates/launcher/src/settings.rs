//! Launcher configuration loading
//!
//! Sources, later ones win:
//! 1. built-in presets (`LauncherConfig::default()`)
//! 2. `launcher.toml` in the platform config directory, if present
//! 3. the file passed with `--config` (must exist)

use std::path::{Path, PathBuf};

use config::{Config, File};
use directories::ProjectDirs;
use ipb_core::domain::LauncherConfig;
use ipb_core::AppError;
use tracing::debug;

const CONFIG_FILE_NAME: &str = "launcher.toml";

/// `<config dir>/ipb-launcher/launcher.toml` for the current user
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ipb-launcher").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Build the launcher configuration from all sources
pub fn load(explicit: Option<&Path>) -> Result<LauncherConfig, AppError> {
    load_from(default_config_path().as_deref(), explicit)
}

pub(crate) fn load_from(
    user_file: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<LauncherConfig, AppError> {
    let defaults = Config::try_from(&LauncherConfig::default()).map_err(config_error)?;
    let mut builder = Config::builder().add_source(defaults);

    if let Some(path) = user_file {
        debug!(path = %path.display(), "Checking user config");
        builder = builder.add_source(File::from(path).required(false));
    }
    if let Some(path) = explicit {
        debug!(path = %path.display(), "Loading config file");
        builder = builder.add_source(File::from(path).required(true));
    }

    let config: LauncherConfig = builder
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(config_error)?;

    Ok(expand(config))
}

/// Expand `~` in every path-like value
fn expand(mut config: LauncherConfig) -> LauncherConfig {
    let tilde = |s: &str| shellexpand::tilde(s).into_owned();

    config.presets.csv_file = tilde(&config.presets.csv_file);
    config.presets.block_library = tilde(&config.presets.block_library);
    config.program = tilde(&config.program);
    config
}

fn config_error(e: config::ConfigError) -> AppError {
    AppError::Config(e.to_string())
}
