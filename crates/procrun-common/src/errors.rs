//! Error types for process execution.
//!
//! Every failure a runner can hit while launching, redirecting or waiting
//! on a child process has its own variant. The boolean entry points in
//! `procrun-process` collapse all of them to `false`; the `try_*` entry
//! points hand them to the caller unchanged.

use thiserror::Error;

use crate::types::ExecPhase;

/// Error type for process execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// The command interpreter could not be launched.
    #[error("Shell unavailable: {shell} - {reason}")]
    ShellUnavailable { shell: String, reason: String },

    /// The argument vector cannot be handed to the OS.
    #[error("Invalid command: {reason}")]
    InvalidCommand { reason: String },

    /// The child process could not be created.
    #[error("Process spawn failed: {program} - {reason}")]
    SpawnFailed { program: String, reason: String },

    /// The child was created but the executable image could not be loaded.
    #[error("Exec failed: {program} - {reason}")]
    ExecFailed { program: String, reason: String },

    /// The redirect target could not be opened for writing.
    #[error("Cannot open output file: {path} - {reason}")]
    OutputOpenFailed { path: String, reason: String },

    /// Standard output could not be rebound to the redirect target.
    #[error("Output redirect failed: {program} - {reason}")]
    RedirectFailed { program: String, reason: String },

    /// Waiting for the child failed.
    #[error("Wait failed: {program} - {reason}")]
    WaitFailed { program: String, reason: String },

    /// The child was terminated by a signal.
    #[error("Process killed: {program} - {signal_name} ({signal})")]
    Signaled {
        program: String,
        signal: i32,
        signal_name: String,
    },

    /// The child exited normally with a non-zero code.
    #[error("Process exited with non-zero status: {program} - exit code {code}")]
    NonZeroExit { program: String, code: i32 },

    /// The platform reported neither an exit code nor a signal.
    #[error("Process terminated abnormally: {program}")]
    AbnormalTermination { program: String },

    /// Runner configuration is unusable.
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },
}

impl ExecError {
    pub fn shell_unavailable(shell: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ShellUnavailable {
            shell: shell.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_command(reason: impl Into<String>) -> Self {
        Self::InvalidCommand {
            reason: reason.into(),
        }
    }

    pub fn spawn_failed(program: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SpawnFailed {
            program: program.into(),
            reason: reason.into(),
        }
    }

    pub fn exec_failed(program: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ExecFailed {
            program: program.into(),
            reason: reason.into(),
        }
    }

    pub fn output_open_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::OutputOpenFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn redirect_failed(program: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RedirectFailed {
            program: program.into(),
            reason: reason.into(),
        }
    }

    pub fn wait_failed(program: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::WaitFailed {
            program: program.into(),
            reason: reason.into(),
        }
    }

    pub fn signaled(
        program: impl Into<String>,
        signal: i32,
        signal_name: impl Into<String>,
    ) -> Self {
        Self::Signaled {
            program: program.into(),
            signal,
            signal_name: signal_name.into(),
        }
    }

    pub fn non_zero_exit(program: impl Into<String>, code: i32) -> Self {
        Self::NonZeroExit {
            program: program.into(),
            code,
        }
    }

    pub fn abnormal_termination(program: impl Into<String>) -> Self {
        Self::AbnormalTermination {
            program: program.into(),
        }
    }

    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// The terminal phase of the execution state machine this error ends in.
    ///
    /// A failed image replacement or redirect happens inside the child, so
    /// the parent sees it as an abnormal child outcome, not a spawn failure.
    pub fn phase(&self) -> ExecPhase {
        match self {
            Self::ShellUnavailable { .. }
            | Self::InvalidCommand { .. }
            | Self::SpawnFailed { .. }
            | Self::OutputOpenFailed { .. }
            | Self::Configuration { .. } => ExecPhase::SpawnFailed,
            Self::WaitFailed { .. } => ExecPhase::WaitFailed,
            Self::NonZeroExit { .. } => ExecPhase::ExitedNormal,
            Self::ExecFailed { .. }
            | Self::RedirectFailed { .. }
            | Self::Signaled { .. }
            | Self::AbnormalTermination { .. } => ExecPhase::ExitedAbnormal,
        }
    }

    /// True when no child process was ever started.
    pub fn before_spawn(&self) -> bool {
        self.phase() == ExecPhase::SpawnFailed
    }
}

/// Result type for process execution.
pub type ExecResult<T> = std::result::Result<T, ExecError>;
