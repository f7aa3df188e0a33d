use crate::domain::model::ColumnMap;
use crate::utils::error::{Result, SumstatsError};
use crate::utils::validation::{validate_log_level, validate_non_empty_string, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Optional settings file passed with `--config`.
///
/// ```toml
/// [columns]
/// variant_id = "SNPID"
/// standard_error = "${SE_COLUMN}"
///
/// [monitoring]
/// enabled = true
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub columns: ColumnMap,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitoringConfig {
    #[serde(default)]
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Loads and parses a TOML settings file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| SumstatsError::ConfigError {
                message: format!("cannot read '{}': {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML text after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SumstatsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SumstatsError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }
}

impl Validate for ColumnMap {
    fn validate(&self) -> Result<()> {
        for (role, name) in self.required() {
            validate_non_empty_string(&format!("columns.{}", role), name)?;
        }
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.columns.validate()?;
        if let Some(level) = self.log_level() {
            validate_log_level("monitoring.log_level", level)?;
        }
        Ok(())
    }
}
