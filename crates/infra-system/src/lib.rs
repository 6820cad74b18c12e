// IPB Infrastructure - System Adapters
// Implements: ProgramRunner, Acknowledger, BlockScanner, CatalogStore

pub mod catalog_csv;
pub mod fs_block_scanner;
pub mod stdin_acknowledger;
pub mod subprocess_runner;
pub mod telemetry;

pub use catalog_csv::CsvCatalogStore;
pub use fs_block_scanner::FsBlockScanner;
pub use stdin_acknowledger::StdinAcknowledger;
pub use subprocess_runner::SubprocessRunner;
pub use telemetry::init_logging;
