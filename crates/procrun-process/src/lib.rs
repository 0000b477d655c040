//! # procrun process
//!
//! Blocking helpers for running external commands from a host process.
//!
//! This crate provides:
//! - Shell execution (`<shell> -c <command line>`)
//! - Direct execution of an argument vector, no shell and no PATH search
//! - Direct execution with standard output redirected to a file
//! - Exit-status decoding that keeps clean exit, non-zero exit and signal
//!   kill apart
//!
//! Every operation reports success as a single boolean: true iff the child
//! terminated normally with exit code 0. The `try_*` methods of
//! [`ProcessRunner`] return the underlying [`ExecError`] instead.

pub mod config;
pub mod execute;
pub mod runner;
pub mod shell;
pub mod status;

pub use config::RunnerConfig;
pub use procrun_common::{CommandLine, ExecError, ExecPhase, ExecResult, Termination};
pub use runner::ProcessRunner;

use std::path::Path;

/// Run `cmd` through `/bin/sh -c`; true iff it exited with 0.
pub fn do_system(cmd: &str) -> bool {
    ProcessRunner::new().shell_execute(cmd)
}

/// Execute `argv` directly and wait; true iff it exited with 0.
///
/// `argv[0]` must be the absolute path of the executable.
pub fn do_exec<S: AsRef<str>>(argv: &[S]) -> bool {
    ProcessRunner::new().exec_and_wait(argv)
}

/// As [`do_exec`], with the child's standard output written to
/// `output_path` (created or truncated, mode `0o644`).
pub fn do_exec_redirect<P: AsRef<Path>, S: AsRef<str>>(output_path: P, argv: &[S]) -> bool {
    ProcessRunner::new().exec_and_wait_with_redirect(output_path, argv)
}
