//! Core domain types for process execution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::errors::{ExecError, ExecResult};

/// Argument vector for a directly executed program.
///
/// Element 0 is the absolute path of the executable and is also passed as
/// the new image's `argv[0]`. The remaining elements are handed to the
/// program verbatim: no shell expansion, no PATH search.
///
/// # Example
/// ```
/// use procrun_common::CommandLine;
///
/// let cmd = CommandLine::new(["/bin/echo", "hello"]).unwrap();
/// assert_eq!(cmd.program(), "/bin/echo");
/// assert_eq!(cmd.args(), ["hello".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CommandLine(Vec<String>);

impl CommandLine {
    /// Builds a command line, rejecting anything the OS could not execute
    /// as given.
    pub fn new<I, S>(argv: I) -> ExecResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();

        let Some(program) = argv.first() else {
            return Err(ExecError::invalid_command("argument vector is empty"));
        };
        if program.is_empty() {
            return Err(ExecError::invalid_command("executable path cannot be empty"));
        }
        if !Path::new(program).is_absolute() {
            return Err(ExecError::invalid_command(format!(
                "executable path must be absolute: {}",
                program
            )));
        }
        if let Some(pos) = argv.iter().position(|arg| arg.contains('\0')) {
            return Err(ExecError::invalid_command(format!(
                "argument {} contains a NUL byte",
                pos
            )));
        }

        Ok(Self(argv))
    }

    /// Absolute path of the executable.
    pub fn program(&self) -> &str {
        &self.0[0]
    }

    /// Arguments after the program path.
    pub fn args(&self) -> &[String] {
        &self.0[1..]
    }

    /// Number of elements including the program path. Never zero.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a `CommandLine` holds at least the program path.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for CommandLine {
    type Error = ExecError;

    fn try_from(argv: Vec<String>) -> ExecResult<Self> {
        Self::new(argv)
    }
}

impl TryFrom<&[&str]> for CommandLine {
    type Error = ExecError;

    fn try_from(argv: &[&str]) -> ExecResult<Self> {
        Self::new(argv.iter().copied())
    }
}

impl From<CommandLine> for Vec<String> {
    fn from(cmd: CommandLine) -> Self {
        cmd.0
    }
}

impl<'a> IntoIterator for &'a CommandLine {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// How a child process ended.
///
/// Clean exit, non-zero exit and signal kill stay distinct even though all
/// but `Exited(0)` count as failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Normal termination with an exit code.
    Exited(i32),
    /// Killed by a signal.
    Signaled { signal: i32, core_dumped: bool },
    /// The platform reported neither an exit code nor a signal.
    Unknown,
}

impl Termination {
    /// True iff the process exited normally with code 0.
    pub fn success(&self) -> bool {
        matches!(self, Self::Exited(0))
    }

    /// Exit code for a normal termination.
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Exited(code) => Some(*code),
            _ => None,
        }
    }

    /// Terminal phase this outcome maps to.
    pub fn phase(&self) -> ExecPhase {
        match self {
            Self::Exited(_) => ExecPhase::ExitedNormal,
            Self::Signaled { .. } | Self::Unknown => ExecPhase::ExitedAbnormal,
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited(code) => write!(f, "exited with code {}", code),
            Self::Signaled {
                signal,
                core_dumped: true,
            } => write!(f, "killed by signal {} (core dumped)", signal),
            Self::Signaled { signal, .. } => write!(f, "killed by signal {}", signal),
            Self::Unknown => write!(f, "terminated abnormally"),
        }
    }
}

/// Phases of a single execution.
///
/// `Init -> Spawning -> {SpawnFailed | ChildRunning} -> Waiting ->
/// {WaitFailed | ExitedNormal | ExitedAbnormal}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecPhase {
    Init,
    Spawning,
    SpawnFailed,
    ChildRunning,
    Waiting,
    WaitFailed,
    ExitedNormal,
    ExitedAbnormal,
}

impl ExecPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::SpawnFailed | Self::WaitFailed | Self::ExitedNormal | Self::ExitedAbnormal
        )
    }

    /// Whether `next` is a legal successor of this phase.
    pub fn can_transition_to(&self, next: ExecPhase) -> bool {
        use ExecPhase::*;

        matches!(
            (self, next),
            (Init, Spawning)
                | (Spawning, SpawnFailed)
                | (Spawning, ChildRunning)
                | (ChildRunning, Waiting)
                | (Waiting, WaitFailed)
                | (Waiting, ExitedNormal)
                | (Waiting, ExitedAbnormal)
        )
    }
}

impl fmt::Display for ExecPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Spawning => "spawning",
            Self::SpawnFailed => "spawn_failed",
            Self::ChildRunning => "child_running",
            Self::Waiting => "waiting",
            Self::WaitFailed => "wait_failed",
            Self::ExitedNormal => "exited_normal",
            Self::ExitedAbnormal => "exited_abnormal",
        };
        f.write_str(name)
    }
}
