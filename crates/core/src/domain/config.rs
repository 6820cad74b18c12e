// Launcher configuration
//
// The preset paths used to be string literals inside the launcher script.
// They are plain data here so the binary can inject them at startup.

use serde::{Deserialize, Serialize};

/// Default description-keys catalog
pub const PRESET_CSV: &str = r"J:\LIB\BR\xxBLOCKS\IPB-DescriptionKeys.csv";

/// Default block library root (scanned recursively)
pub const PRESET_BLOCK_LIBRARY: &str = r"J:\LIB\BR";

/// External validator started by the launcher
pub const DEFAULT_PROGRAM: &str = "block_validator_configured.py";

/// Report file the validator writes into its working directory
pub const DEFAULT_REPORT_FILE: &str = "validation_report.txt";

/// Annotated copy of the catalog written by the validator
pub const DEFAULT_VALIDATED_CSV: &str = "IPB-DescriptionKeys-Validated.csv";

/// Input locations shown to the user and consumed by the validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetPaths {
    pub csv_file: String,
    pub block_library: String,
}

impl Default for PresetPaths {
    fn default() -> Self {
        Self {
            csv_file: PRESET_CSV.to_string(),
            block_library: PRESET_BLOCK_LIBRARY.to_string(),
        }
    }
}

/// Result files the user is pointed at after validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputFiles {
    pub report_file: String,
    pub validated_csv: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            report_file: DEFAULT_REPORT_FILE.to_string(),
            validated_csv: DEFAULT_VALIDATED_CSV.to_string(),
        }
    }
}

/// How the launcher turns the validator's exit status into its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitPolicy {
    /// Exit 0 whatever the validator did (historical behavior)
    #[default]
    AlwaysSucceed,
    /// Exit with the validator's code; 1 if it never ran or was killed
    Propagate,
}

/// Full launcher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub presets: PresetPaths,
    pub program: String,
    pub outputs: OutputFiles,
    pub exit_policy: ExitPolicy,
    /// Wait for an acknowledgment before returning
    pub pause: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            presets: PresetPaths::default(),
            program: DEFAULT_PROGRAM.to_string(),
            outputs: OutputFiles::default(),
            exit_policy: ExitPolicy::default(),
            pause: true,
        }
    }
}
