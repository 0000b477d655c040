//! Exit-status decoding and launch-error classification.

use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

use nix::errno::Errno;
use nix::sys::signal::Signal;
use procrun_common::{ExecError, ExecResult, Termination};

/// Decode a platform exit status into a [`Termination`].
pub fn decode_exit_status(status: ExitStatus) -> Termination {
    if let Some(code) = status.code() {
        Termination::Exited(code)
    } else if let Some(signal) = status.signal() {
        Termination::Signaled {
            signal,
            core_dumped: status.core_dumped(),
        }
    } else {
        Termination::Unknown
    }
}

/// Symbolic name for a signal number, e.g. `SIGKILL`.
pub fn signal_name(signal: i32) -> String {
    match Signal::try_from(signal) {
        Ok(sig) => sig.as_str().to_string(),
        Err(_) => format!("signal {}", signal),
    }
}

/// Map a termination to the success/failure contract: only `Exited(0)`
/// is success.
pub fn check_termination(program: &str, termination: Termination) -> ExecResult<()> {
    match termination {
        Termination::Exited(0) => Ok(()),
        Termination::Exited(code) => Err(ExecError::non_zero_exit(program, code)),
        Termination::Signaled { signal, .. } => {
            Err(ExecError::signaled(program, signal, signal_name(signal)))
        }
        Termination::Unknown => Err(ExecError::abnormal_termination(program)),
    }
}

/// Where a failed launch went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchFailure {
    /// The child process could not be created.
    Create,
    /// The executable image could not be loaded.
    Image,
    /// Standard output could not be rebound in the child.
    Redirect,
}

/// Classify an error returned by `Command::spawn` by its errno.
///
/// Errors raised inside the child before the image is replaced come back
/// through the same `io::Error`, so the errno is the only thing telling a
/// failed fork apart from a failed exec or dup.
pub fn classify_launch_error(err: &io::Error, redirecting: bool) -> LaunchFailure {
    let Some(raw) = err.raw_os_error() else {
        return LaunchFailure::Create;
    };

    match Errno::from_raw(raw) {
        Errno::EBADF | Errno::EBUSY if redirecting => LaunchFailure::Redirect,
        Errno::ENOENT
        | Errno::EACCES
        | Errno::EPERM
        | Errno::ENOEXEC
        | Errno::ENOTDIR
        | Errno::EISDIR
        | Errno::ELOOP
        | Errno::ETXTBSY
        | Errno::E2BIG
        | Errno::ENAMETOOLONG => LaunchFailure::Image,
        _ => LaunchFailure::Create,
    }
}

/// Build the error for a failed launch of `program`.
pub fn launch_error(program: &str, err: &io::Error, redirecting: bool) -> ExecError {
    match classify_launch_error(err, redirecting) {
        LaunchFailure::Create => ExecError::spawn_failed(program, err.to_string()),
        LaunchFailure::Image => ExecError::exec_failed(program, err.to_string()),
        LaunchFailure::Redirect => ExecError::redirect_failed(program, err.to_string()),
    }
}
