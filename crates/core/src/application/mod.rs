// Application Layer - Use Cases

pub mod launcher;
pub mod validation;

// Re-exports
pub use launcher::Launcher;
pub use validation::ValidationService;
