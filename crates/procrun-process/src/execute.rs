//! Process execution primitives.
//!
//! Direct execution of an argument vector (no shell, no PATH search) with
//! a blocking wait, optionally with the child's standard output bound to a
//! file.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;
use std::process::{Command, Stdio};

use procrun_common::{CommandLine, ExecError, ExecPhase, ExecResult, Termination};
use tracing::{debug, trace};

use crate::status::{decode_exit_status, launch_error};

/// Tracks one execution through its phases.
#[derive(Debug)]
pub(crate) struct Execution<'a> {
    program: &'a str,
    phase: ExecPhase,
}

impl<'a> Execution<'a> {
    pub(crate) fn new(program: &'a str) -> Self {
        Self {
            program,
            phase: ExecPhase::Init,
        }
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> ExecPhase {
        self.phase
    }

    fn advance(&mut self, next: ExecPhase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "illegal transition {} -> {}",
            self.phase,
            next
        );
        trace!(program = self.program, from = %self.phase, to = %next, "execution phase");
        self.phase = next;
    }

    /// Walk to the terminal phase `err` ends in and hand the error back.
    fn fail(&mut self, err: ExecError) -> ExecError {
        let terminal = err.phase();
        if terminal != ExecPhase::SpawnFailed && self.phase == ExecPhase::Spawning {
            // The child existed but never reached its own image.
            self.advance(ExecPhase::ChildRunning);
            self.advance(ExecPhase::Waiting);
        }
        self.advance(terminal);
        err
    }

    /// Spawn `command`, block until it ends and decode how it ended.
    ///
    /// `command` is consumed and dropped right after the spawn so that any
    /// descriptor it holds for the child is closed in the parent before
    /// waiting.
    pub(crate) fn run(
        &mut self,
        mut command: Command,
        on_launch_error: impl FnOnce(&io::Error) -> ExecError,
    ) -> ExecResult<Termination> {
        self.advance(ExecPhase::Spawning);
        let spawned = command.spawn();
        drop(command);

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => return Err(self.fail(on_launch_error(&e))),
        };

        self.advance(ExecPhase::ChildRunning);
        debug!("Process spawned: {} (PID: {})", self.program, child.id());

        self.advance(ExecPhase::Waiting);
        let status = match child.wait() {
            Ok(status) => status,
            Err(e) => return Err(self.fail(ExecError::wait_failed(self.program, e.to_string()))),
        };

        let termination = decode_exit_status(status);
        self.advance(termination.phase());
        debug!("Process {} {}", self.program, termination);
        Ok(termination)
    }
}

fn direct_command(cmd: &CommandLine) -> Command {
    let mut command = Command::new(cmd.program());
    command.args(cmd.args());
    command
}

/// Execute `cmd` directly and wait for it to terminate.
///
/// `Err` means the child never produced a termination of its own: it could
/// not be created, its image could not be loaded, or waiting failed.
pub fn exec_and_wait(cmd: &CommandLine) -> ExecResult<Termination> {
    let program = cmd.program();
    Execution::new(program).run(direct_command(cmd), |e| launch_error(program, e, false))
}

/// Open a redirect target: write-only, created if absent, truncated.
///
/// The descriptor is close-on-exec; only the copy bound to the child's
/// standard output survives into the new image.
pub fn open_output(path: &Path, mode: u32) -> ExecResult<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode)
        .open(path)
        .map_err(|e| ExecError::output_open_failed(path.display().to_string(), e.to_string()))
}

/// Execute `cmd` directly with its standard output written to
/// `output_path`, and wait for it to terminate.
///
/// Nothing is spawned if `output_path` cannot be opened.
pub fn exec_and_wait_with_redirect(
    cmd: &CommandLine,
    output_path: &Path,
    mode: u32,
) -> ExecResult<Termination> {
    let program = cmd.program();
    let mut execution = Execution::new(program);

    let output = open_output(output_path, mode).map_err(|e| {
        execution.advance(ExecPhase::Spawning);
        execution.fail(e)
    })?;
    debug!("Redirecting stdout of {} to {}", program, output_path.display());

    let mut command = direct_command(cmd);
    command.stdout(Stdio::from(output));
    execution.run(command, |e| launch_error(program, e, true))
}
