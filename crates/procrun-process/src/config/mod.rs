//! Runner configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod validation;

/// Settings shared by every invocation a [`crate::ProcessRunner`] makes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Command interpreter used by shell-execute.
    #[serde(default = "default_shell")]
    pub shell: PathBuf,

    /// Flag telling the interpreter to read the command from its next argument.
    #[serde(default = "default_shell_flag")]
    pub shell_flag: String,

    /// Permission bits for a newly created redirect target (before umask).
    #[serde(default = "default_output_mode")]
    pub output_mode: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            shell_flag: default_shell_flag(),
            output_mode: default_output_mode(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::load_from_string(&content)
    }

    /// Load configuration from a YAML string
    pub fn load_from_string(content: &str) -> Result<Self> {
        let config: RunnerConfig =
            serde_yaml::from_str(content).context("Failed to parse YAML configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}

fn default_shell() -> PathBuf {
    PathBuf::from("/bin/sh")
}

fn default_shell_flag() -> String {
    "-c".to_string()
}

fn default_output_mode() -> u32 {
    0o644
}
