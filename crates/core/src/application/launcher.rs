// Launcher Use Case
//
// Prints the preset configuration, runs the external validator by name with
// no arguments, prints where the results went, then waits for the user.
// The validator's exit status never changes what is printed.

use std::io::Write;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{LaunchOutcome, LauncherConfig, ProgramStatus};
use crate::error::Result;
use crate::port::{Acknowledger, ProgramInvocation, ProgramRunner, TimeProvider};

const RULE: &str = "========================================";
const TITLE: &str = "IPB Block Validator - Preset Configuration";
const STARTING: &str = "Starting validation...";
const COMPLETE: &str = "Validation Complete!";
const RESULTS_HINT: &str = "Check these files for results:";
const PAUSE_PROMPT: &str = "Press any key to continue . . . ";

pub struct Launcher {
    config: LauncherConfig,
    runner: Arc<dyn ProgramRunner>,
    acknowledger: Arc<dyn Acknowledger>,
    time_provider: Arc<dyn TimeProvider>,
}

impl Launcher {
    pub fn new(
        config: LauncherConfig,
        runner: Arc<dyn ProgramRunner>,
        acknowledger: Arc<dyn Acknowledger>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            config,
            runner,
            acknowledger,
            time_provider,
        }
    }

    /// Run the launch sequence once, writing user-facing text to `out`.
    ///
    /// Only failures to write `out` or to read the acknowledgment are errors.
    /// A validator that is missing or fails is reported in the outcome.
    pub async fn run<W: Write + Send>(&self, out: &mut W) -> Result<LaunchOutcome> {
        self.write_banner(out)?;

        let status = self.run_validator().await;

        self.write_completion(out)?;

        let acknowledged = if self.config.pause {
            write!(out, "{}", PAUSE_PROMPT)?;
            out.flush()?;
            self.acknowledger.wait_for_acknowledgment().await?;
            true
        } else {
            false
        };

        let (status, duration_ms) = status;
        Ok(LaunchOutcome {
            status,
            duration_ms,
            acknowledged,
        })
    }

    fn write_banner<W: Write>(&self, out: &mut W) -> Result<()> {
        let presets = &self.config.presets;

        writeln!(out, "{}", RULE)?;
        writeln!(out, "{}", TITLE)?;
        writeln!(out, "{}", RULE)?;
        writeln!(out)?;
        writeln!(out, "CSV File:      {}", presets.csv_file)?;
        writeln!(out, "Block Library: {} (all subfolders)", presets.block_library)?;
        writeln!(out)?;
        writeln!(out, "{}", STARTING)?;
        writeln!(out)?;
        // The child shares our stdout; flush so the banner lands first
        out.flush()?;
        Ok(())
    }

    fn write_completion<W: Write>(&self, out: &mut W) -> Result<()> {
        let outputs = &self.config.outputs;

        writeln!(out)?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "{}", COMPLETE)?;
        writeln!(out, "{}", RULE)?;
        writeln!(out)?;
        writeln!(out, "{}", RESULTS_HINT)?;
        writeln!(out, "  - {}", outputs.report_file)?;
        writeln!(out, "  - {}", outputs.validated_csv)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    async fn run_validator(&self) -> (ProgramStatus, i64) {
        let invocation = ProgramInvocation::bare(self.config.program.clone());
        let start = self.time_provider.now_millis();

        info!(program = %invocation.program, "Starting external validator");

        let status = match self.runner.run(&invocation).await {
            Ok(exit) => match exit.exit_code {
                Some(code) => ProgramStatus::Exited(code),
                None => ProgramStatus::Terminated,
            },
            Err(e) => {
                warn!(program = %invocation.program, error = %e, "External validator did not run");
                ProgramStatus::SpawnFailed(e.to_string())
            }
        };

        let duration_ms = self.time_provider.now_millis() - start;

        if status.is_success() {
            info!(duration_ms, "External validator finished");
        } else {
            warn!(duration_ms, status = ?status, "External validator did not succeed");
        }

        (status, duration_ms)
    }
}
