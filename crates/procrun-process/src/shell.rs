//! Shell invocation.
//!
//! Runs a command line through the command interpreter, the way `system(3)`
//! does: `<shell> -c <command line>`, blocking until the interpreter exits.

use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::Command;

use procrun_common::{ExecError, ExecResult, Termination};

use crate::execute::Execution;

/// Run `command_line` through `shell` and wait for it.
///
/// A shell that cannot be launched is reported as
/// [`ExecError::ShellUnavailable`] regardless of the underlying errno.
pub fn shell_execute(shell: &Path, shell_flag: &str, command_line: &str) -> ExecResult<Termination> {
    if command_line.contains('\0') {
        return Err(ExecError::invalid_command("command line contains a NUL byte"));
    }

    let shell_name = shell.display().to_string();
    let mut command = Command::new(shell);
    command.arg(shell_flag).arg(command_line);

    Execution::new(&shell_name).run(command, |e| {
        ExecError::shell_unavailable(shell_name.as_str(), e.to_string())
    })
}

/// Whether `shell` exists and carries an execute bit.
pub fn shell_available(shell: &Path) -> bool {
    match std::fs::metadata(shell) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}
