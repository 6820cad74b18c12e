// Launch outcome

use super::config::ExitPolicy;

/// What happened to the external validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramStatus {
    /// Process ran and exited with a code
    Exited(i32),
    /// Process ended without an exit code (killed by a signal)
    Terminated,
    /// Process could not be started
    SpawnFailed(String),
}

impl ProgramStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ProgramStatus::Exited(0))
    }
}

/// Result of one launcher run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub status: ProgramStatus,
    pub duration_ms: i64,
    pub acknowledged: bool,
}

impl LaunchOutcome {
    /// Process exit code for the launcher itself under `policy`
    pub fn exit_code(&self, policy: ExitPolicy) -> i32 {
        match policy {
            ExitPolicy::AlwaysSucceed => 0,
            ExitPolicy::Propagate => match &self.status {
                ProgramStatus::Exited(code) => *code,
                ProgramStatus::Terminated | ProgramStatus::SpawnFailed(_) => 1,
            },
        }
    }
}
