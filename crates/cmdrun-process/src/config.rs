//! Invoker configuration.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use cmdrun_common::ShellMode;

/// Configuration for an [`Invoker`](crate::Invoker).
///
/// Every field has a default, so an empty YAML document is a valid
/// configuration:
///
/// ```yaml
/// shell_mode: shell   # or "direct" (default)
/// shell: /bin/bash    # optional, only used in shell mode
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvokerConfig {
    pub shell_mode: ShellMode,

    /// Shell program for [`ShellMode::Shell`]; the platform shell when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
}

impl InvokerConfig {
    pub fn direct() -> Self {
        Self::default()
    }

    pub fn shell() -> Self {
        Self {
            shell_mode: ShellMode::Shell,
            shell: None,
        }
    }

    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::load_from_string(&content)
    }

    /// Load configuration from a YAML string
    pub fn load_from_string(content: &str) -> Result<Self> {
        // An empty document means all defaults.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: InvokerConfig = serde_yaml::from_str(content)
            .context("Failed to parse YAML configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(shell) = &self.shell {
            if shell.trim().is_empty() {
                bail!("Shell program cannot be empty");
            }
        }
        Ok(())
    }
}
