// Port Layer - Interfaces for external dependencies

pub mod acknowledger;
pub mod block_scanner;
pub mod catalog_store;
pub mod program_runner;
pub mod time_provider;

// Re-exports
pub use acknowledger::Acknowledger;
pub use block_scanner::BlockScanner;
pub use catalog_store::CatalogStore;
pub use program_runner::{ExecutionError, ProgramExit, ProgramInvocation, ProgramRunner};
pub use time_provider::TimeProvider;
