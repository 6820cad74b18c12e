// Domain Layer - Pure data and rules, no I/O

pub mod catalog;
pub mod config;
pub mod launch;
pub mod library;
pub mod validation;

// Re-exports
pub use catalog::{CatalogEntry, CatalogTable};
pub use config::{ExitPolicy, LauncherConfig, OutputFiles, PresetPaths};
pub use launch::{LaunchOutcome, ProgramStatus};
pub use library::BlockLibrary;
pub use validation::{EntryFinding, EntryStatus, ValidationResults, ValidationSummary};
