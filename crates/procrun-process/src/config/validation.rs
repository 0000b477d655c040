use super::*;
use anyhow::{anyhow, Result};

/// Validate the complete configuration
pub fn validate_config(config: &RunnerConfig) -> Result<()> {
    validate_shell(&config.shell)?;

    if config.shell_flag.is_empty() {
        return Err(anyhow!("Shell flag cannot be empty"));
    }

    validate_output_mode(config.output_mode)
}

/// The shell must be named by an absolute path; it is never looked up in PATH.
fn validate_shell(shell: &Path) -> Result<()> {
    if shell.as_os_str().is_empty() {
        return Err(anyhow!("Shell path cannot be empty"));
    }

    if !shell.is_absolute() {
        return Err(anyhow!("Shell path must be absolute, got: {}", shell.display()));
    }

    Ok(())
}

fn validate_output_mode(mode: u32) -> Result<()> {
    if mode > 0o7777 {
        return Err(anyhow!("Output mode must be within 0o7777, got: {:#o}", mode));
    }

    Ok(())
}
