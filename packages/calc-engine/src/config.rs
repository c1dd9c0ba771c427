use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "CALC_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Text shown in the menu heading.
    #[serde(default = "default_title")]
    pub title: String,
    /// Default diagnostics filter, in `tracing_subscriber::EnvFilter` syntax.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

pub fn default_title() -> String {
    "Clean Calculator".to_string()
}

pub fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            log_level: default_log_level(),
        }
    }
}

impl CalculatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            anyhow::bail!("Calculator config validation failed: title must not be blank");
        }
        if self.title.contains(['\n', '\r']) {
            anyhow::bail!("Calculator config validation failed: title must be a single line");
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("Calculator config validation failed: log_level must not be blank");
        }
        Ok(())
    }

    /// Loads the file named by `CALC_CONFIG`, or the defaults when it is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => load_config(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }
}

pub fn load_config(path: &Path) -> Result<CalculatorConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: CalculatorConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config
        .validate()
        .context("Failed to validate loaded calculator config")?;
    Ok(config)
}
