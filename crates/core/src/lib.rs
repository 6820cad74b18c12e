// IPB Core - Domain Logic & Ports
// NO infrastructure dependencies: processes, stdin and files live behind ports

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};
