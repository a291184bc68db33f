//! Lab configuration loaded from an optional `lab.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "lab.toml";

/// Console behaviour knobs (TOML).
///
/// Every field is optional in the file. Missing fields fall back to the
/// behaviour of a plain interactive session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LabConfig {
    /// Clear the terminal before drawing the menu and before each activity.
    pub clear_screen: bool,

    /// Wait for Enter after each activity and after an invalid menu option.
    pub pause_after_activity: bool,

    /// Word that leaves the factorial prompt (compared case-insensitively).
    pub factorial_exit_token: String,

    /// Upper bound of the counting loop in the loops activity.
    pub count_to: u32,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            pause_after_activity: true,
            factorial_exit_token: "exit".to_string(),
            count_to: 10,
        }
    }
}

impl LabConfig {
    pub fn validate(&self) -> Result<()> {
        if self.factorial_exit_token.trim().is_empty() {
            return Err(anyhow!("factorial_exit_token must be non-empty"));
        }
        if self.count_to == 0 {
            return Err(anyhow!("count_to must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LabConfig::default()`.
pub fn load_config(path: &Path) -> Result<LabConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using defaults");
        let cfg = LabConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LabConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
