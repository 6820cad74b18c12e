// Subprocess runner implementation
// reason: tokio::process so the launcher can await the child like any other port
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;
use tracing::{debug, info};

use ipb_core::port::program_runner::{
    ExecutionError, ProgramExit, ProgramInvocation, ProgramRunner,
};
use ipb_core::port::TimeProvider;

/// Subprocess runner
///
/// Starts the program with the launcher's own stdin/stdout/stderr and
/// environment, so its console output shows up in place. No timeout.
///
/// A bare program name that names a file in the working directory runs that
/// file. Any other name goes through the usual `PATH` search.
pub struct SubprocessRunner {
    time_provider: Arc<dyn TimeProvider>,
    working_dir: Option<PathBuf>,
}

impl SubprocessRunner {
    /// Create a new subprocess runner
    ///
    /// # Example
    /// ```ignore
    /// let runner = SubprocessRunner::new(Arc::new(SystemTimeProvider));
    /// ```
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            time_provider,
            working_dir: None,
        }
    }

    /// Run programs from `dir` instead of the launcher's current directory
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn program_path(&self, program: &str) -> PathBuf {
        match &self.working_dir {
            Some(dir) => resolve_program(program, dir),
            None => match std::env::current_dir() {
                Ok(dir) => resolve_program(program, &dir),
                Err(_) => PathBuf::from(program),
            },
        }
    }
}

/// Prefer `dir/program` for bare names that exist there
fn resolve_program(program: &str, dir: &Path) -> PathBuf {
    if !program.is_empty() && !program.chars().any(std::path::is_separator) {
        let local = dir.join(program);
        if local.is_file() {
            return local;
        }
    }
    PathBuf::from(program)
}

#[async_trait]
impl ProgramRunner for SubprocessRunner {
    async fn run(&self, invocation: &ProgramInvocation) -> Result<ProgramExit, ExecutionError> {
        let start_time = self.time_provider.now_millis();

        info!(
            program = %invocation.program,
            args = ?invocation.args,
            "Starting subprocess"
        );

        let program = self.program_path(&invocation.program);
        debug!(path = %program.display(), "Resolved program");

        let mut command = Command::new(&program);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let mut child = command
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| ExecutionError::SpawnFailed(format!("{}: {}", invocation.program, e)))?;

        let status = child
            .wait()
            .await
            .map_err(|e| ExecutionError::IoError(e.to_string()))?;

        let duration_ms = self.time_provider.now_millis() - start_time;

        info!(
            program = %invocation.program,
            duration_ms = %duration_ms,
            exit_code = ?status.code(),
            "Subprocess finished"
        );

        Ok(ProgramExit {
            exit_code: status.code(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use ipb_core::port::time_provider::SystemTimeProvider;

    fn runner() -> SubprocessRunner {
        SubprocessRunner::new(Arc::new(SystemTimeProvider))
    }

    #[tokio::test]
    async fn test_run_success() {
        let exit = runner().run(&ProgramInvocation::bare("true")).await.unwrap();
        assert_eq!(exit.exit_code, Some(0));
    }

    #[tokio::test]
    async fn test_run_failure_reports_code() {
        let exit = runner()
            .run(&ProgramInvocation::bare("false"))
            .await
            .unwrap();
        assert_eq!(exit.exit_code, Some(1));
    }

    #[tokio::test]
    async fn test_args_are_passed() {
        let invocation = ProgramInvocation {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), "exit 7".to_string()],
        };
        let exit = runner().run(&invocation).await.unwrap();
        assert_eq!(exit.exit_code, Some(7));
    }

    #[test]
    fn test_resolve_program() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("check.py"), "").unwrap();

        assert_eq!(
            resolve_program("check.py", tmp.path()),
            tmp.path().join("check.py")
        );
        assert_eq!(resolve_program("sh", tmp.path()), PathBuf::from("sh"));
        assert_eq!(
            resolve_program("bin/check.py", tmp.path()),
            PathBuf::from("bin/check.py")
        );
    }

    #[tokio::test]
    async fn test_program_in_working_dir() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().unwrap();
        let script = tmp.path().join("block_validator_configured.py");
        std::fs::write(&script, "#!/bin/sh\nexit 3\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let exit = runner()
            .with_working_dir(tmp.path())
            .run(&ProgramInvocation::bare("block_validator_configured.py"))
            .await
            .unwrap();
        assert_eq!(exit.exit_code, Some(3));
    }

    #[tokio::test]
    async fn test_missing_program() {
        let result = runner()
            .run(&ProgramInvocation::bare("definitely-not-a-real-program-ipb"))
            .await;
        match result {
            Err(ExecutionError::SpawnFailed(msg)) => {
                assert!(msg.contains("definitely-not-a-real-program-ipb"))
            }
            other => panic!("expected spawn failure, got {:?}", other),
        }
    }
}
