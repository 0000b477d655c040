//! Boolean-result process runner.
//!
//! Wraps the execution primitives behind one configured value. Each
//! operation comes in two forms: `try_*` returns the precise
//! [`ExecError`], the plain form collapses it to `false` and logs it.

use std::path::Path;

use procrun_common::{CommandLine, ExecError, ExecResult};
use tracing::{debug, error, warn};

use crate::config::RunnerConfig;
use crate::execute::{exec_and_wait, exec_and_wait_with_redirect};
use crate::shell::{shell_available, shell_execute};
use crate::status::check_termination;

/// Runs external commands and reports success as a boolean.
///
/// Holds only immutable configuration; every call is independent and
/// blocks the calling thread until its child has terminated.
///
/// # Examples
///
/// ```rust,no_run
/// use procrun_process::ProcessRunner;
///
/// let runner = ProcessRunner::new();
/// assert!(runner.shell_execute("true"));
/// assert!(runner.exec_and_wait(&["/bin/echo", "hello"]));
/// assert!(runner.exec_and_wait_with_redirect("/tmp/out.txt", &["/bin/echo", "hello"]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    config: RunnerConfig,
}

impl ProcessRunner {
    /// Runner with the default configuration (`/bin/sh -c`, mode `0o644`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner with a validated configuration.
    pub fn with_config(config: RunnerConfig) -> ExecResult<Self> {
        config
            .validate()
            .map_err(|e| ExecError::configuration(format!("{:#}", e)))?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Whether the configured shell can be launched at all.
    pub fn shell_available(&self) -> bool {
        shell_available(&self.config.shell)
    }

    /// Run `command_line` through the shell; `Ok` iff it exited with 0.
    pub fn try_shell_execute(&self, command_line: &str) -> ExecResult<()> {
        debug!("Shell execute: {}", command_line);
        let termination = shell_execute(&self.config.shell, &self.config.shell_flag, command_line)?;
        check_termination(&self.config.shell.display().to_string(), termination)
    }

    /// Execute `argv` directly; `Ok` iff it exited with 0.
    pub fn try_exec<S: AsRef<str>>(&self, argv: &[S]) -> ExecResult<()> {
        let cmd = CommandLine::new(argv.iter().map(AsRef::<str>::as_ref))?;
        debug!("Exec: {}", cmd);
        let termination = exec_and_wait(&cmd)?;
        check_termination(cmd.program(), termination)
    }

    /// Execute `argv` directly with stdout written to `output_path`;
    /// `Ok` iff it exited with 0.
    pub fn try_exec_redirect<P: AsRef<Path>, S: AsRef<str>>(
        &self,
        output_path: P,
        argv: &[S],
    ) -> ExecResult<()> {
        let output_path = output_path.as_ref();
        let cmd = CommandLine::new(argv.iter().map(AsRef::<str>::as_ref))?;
        debug!("Exec: {} > {}", cmd, output_path.display());
        let termination =
            exec_and_wait_with_redirect(&cmd, output_path, self.config.output_mode)?;
        check_termination(cmd.program(), termination)
    }

    pub fn shell_execute(&self, command_line: &str) -> bool {
        report(self.try_shell_execute(command_line))
    }

    pub fn exec_and_wait<S: AsRef<str>>(&self, argv: &[S]) -> bool {
        report(self.try_exec(argv))
    }

    pub fn exec_and_wait_with_redirect<P: AsRef<Path>, S: AsRef<str>>(
        &self,
        output_path: P,
        argv: &[S],
    ) -> bool {
        report(self.try_exec_redirect(output_path, argv))
    }
}

/// Collapse a result to the boolean contract, logging the failure.
fn report(result: ExecResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(
            e @ (ExecError::NonZeroExit { .. }
            | ExecError::Signaled { .. }
            | ExecError::AbnormalTermination { .. }),
        ) => {
            warn!("{}", e);
            false
        }
        Err(e) => {
            error!("{} (phase: {})", e, e.phase());
            false
        }
    }
}
