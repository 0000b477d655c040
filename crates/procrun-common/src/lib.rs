//! # procrun common
//!
//! Types shared by the procrun crates: the error taxonomy for launching
//! and waiting on child processes, the validated argument vector, and the
//! decoded termination of a child.

pub mod errors;
pub mod types;

pub use errors::{ExecError, ExecResult};
pub use types::{CommandLine, ExecPhase, Termination};
