// Program Runner Port
// Abstraction for starting the external validator and waiting on it

use async_trait::async_trait;
use thiserror::Error;

/// What to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl ProgramInvocation {
    /// Program started by name with no arguments
    pub fn bare(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }
}

/// How the process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramExit {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

/// Execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Program Runner trait
///
/// Implementations:
/// - SubprocessRunner: spawns an OS process with inherited stdio
/// - MockProgramRunner: scripted outcomes for tests
#[async_trait]
pub trait ProgramRunner: Send + Sync {
    /// Start the program and wait until it exits
    ///
    /// # Errors
    /// - ExecutionError::SpawnFailed if the process cannot be started
    /// - ExecutionError::IoError if waiting on the process fails
    async fn run(&self, invocation: &ProgramInvocation) -> Result<ProgramExit, ExecutionError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock runner behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Process exits with this code
        ExitWith(i32),
        /// Process killed by a signal
        Terminated,
        /// Process cannot be started
        SpawnFail(String),
    }

    /// Mock Program Runner for testing
    ///
    /// Records every invocation it receives.
    pub struct MockProgramRunner {
        behavior: MockBehavior,
        invocations: Arc<Mutex<Vec<ProgramInvocation>>>,
    }

    impl MockProgramRunner {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                invocations: Arc::new(Mutex::new(Vec::new())),
            }
        }
        pub fn new_success() -> Self {
            Self::new(MockBehavior::ExitWith(0))
        }
        pub fn new_exit(code: i32) -> Self {
            Self::new(MockBehavior::ExitWith(code))
        }
        pub fn new_spawn_fail(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::SpawnFail(message.into()))
        }
        pub fn call_count(&self) -> usize {
            self.invocations.lock().unwrap().len()
        }
        pub fn invocations(&self) -> Vec<ProgramInvocation> {
            self.invocations.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProgramRunner for MockProgramRunner {
        async fn run(&self, invocation: &ProgramInvocation) -> Result<ProgramExit, ExecutionError> {
            self.invocations.lock().unwrap().push(invocation.clone());

            match &self.behavior {
                MockBehavior::ExitWith(code) => Ok(ProgramExit {
                    exit_code: Some(*code),
                }),
                MockBehavior::Terminated => Ok(ProgramExit { exit_code: None }),
                MockBehavior::SpawnFail(msg) => Err(ExecutionError::SpawnFailed(msg.clone())),
            }
        }
    }
}
