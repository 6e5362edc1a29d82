//! Configuration discovery and loading
//!
//! This module handles the configuration discovery hierarchy:
//! 1. Current directory: ./taskbook.toml or ./.taskbook/config.toml
//! 2. User config: ~/.taskbook/config.toml
//! 3. Built-in defaults

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::env;
use crate::task::parse_due_date;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env as std_env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Settings for the taskbook binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskbookConfig {
    /// tracing filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Fixed `YYYY-MM-DD` date to use as today
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<String>,
    /// Assignee bound to the demo executor
    pub assignee: String,
    /// Message of the demo reminder
    pub reminder_message: String,
}

impl Default for TaskbookConfig {
    fn default() -> Self {
        Self {
            log_filter: env::DEFAULT_LOG_FILTER.to_string(),
            today: None,
            assignee: "John".to_string(),
            reminder_message: "Don't forget!".to_string(),
        }
    }
}

impl TaskbookConfig {
    /// Load configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_toml_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml_string()?;
        fs::write(path, content).context("Failed to write config file")
    }

    /// Convert configuration to a TOML string
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Reject a malformed `today` before anything runs
    pub fn validate(&self) -> Result<()> {
        if let Some(today) = &self.today {
            parse_due_date(today).context("Invalid `today` in configuration")?;
        }
        Ok(())
    }

    /// Date source described by this configuration
    pub fn clock(&self) -> Result<Arc<dyn Clock>> {
        match &self.today {
            Some(today) => {
                let date = parse_due_date(today).context("Invalid `today` in configuration")?;
                Ok(Arc::new(FixedClock(date)))
            }
            None => Ok(Arc::new(SystemClock)),
        }
    }
}

/// Configuration discovery system
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Load an explicit file, or discover one using the hierarchy
    pub fn load(config_override: Option<&Path>) -> Result<TaskbookConfig> {
        Self::load_with_source(config_override).map(|(config, _)| config)
    }

    /// Like [`ConfigDiscovery::load`], also returning the file the
    /// configuration came from (`None` for built-in defaults).
    ///
    /// Runs before logging is set up in the binary, which reports the
    /// returned source once the subscriber exists.
    pub fn load_with_source(
        config_override: Option<&Path>,
    ) -> Result<(TaskbookConfig, Option<PathBuf>)> {
        let source = match config_override {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(),
        };
        let config = match &source {
            Some(path) => TaskbookConfig::from_toml_file(path)?,
            None => TaskbookConfig::default(),
        };
        Ok((config, source))
    }

    /// Discover and load configuration using the hierarchy
    pub fn discover_config() -> Result<TaskbookConfig> {
        if let Some(config_path) = Self::find_config_file() {
            info!("Loading configuration from: {:?}", config_path);
            return TaskbookConfig::from_toml_file(config_path);
        }

        info!("No configuration file found, using defaults");
        Ok(TaskbookConfig::default())
    }

    /// Find configuration file using discovery hierarchy
    pub fn find_config_file() -> Option<PathBuf> {
        let current_dir = std_env::current_dir().ok();
        let home_dir = Self::get_home_dir();
        Self::find_config_file_in(current_dir.as_deref(), home_dir.as_deref())
    }

    /// First existing candidate for the given working and home directories
    pub fn find_config_file_in(
        current_dir: Option<&Path>,
        home_dir: Option<&Path>,
    ) -> Option<PathBuf> {
        for candidate in Self::config_candidates(current_dir, home_dir) {
            debug!("Checking for config file: {:?}", candidate);
            if candidate.is_file() {
                debug!("Found config file: {:?}", candidate);
                return Some(candidate);
            }
        }

        debug!("No config file found in discovery hierarchy");
        None
    }

    /// Configuration file candidates in priority order
    pub fn config_candidates(current_dir: Option<&Path>, home_dir: Option<&Path>) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(current_dir) = current_dir {
            candidates.push(current_dir.join(env::LOCAL_CONFIG_FILE_NAME));
            candidates.push(env::local_config_file_path(current_dir));
        }

        if let Some(home_dir) = home_dir {
            candidates.push(env::user_config_file_path(home_dir));
        }

        candidates
    }

    /// Get home directory path
    fn get_home_dir() -> Option<PathBuf> {
        std_env::var("HOME")
            .ok()
            .or_else(|| std_env::var("USERPROFILE").ok())
            .map(PathBuf::from)
    }

    /// Describe the discovery hierarchy and the effective configuration
    pub fn discovery_report(config_override: Option<&Path>) -> Result<String> {
        let mut report = String::from("Configuration Discovery Hierarchy:\n");

        let current_dir = std_env::current_dir().ok();
        let home_dir = Self::get_home_dir();
        let candidates = Self::config_candidates(current_dir.as_deref(), home_dir.as_deref());
        for (i, candidate) in candidates.iter().enumerate() {
            let status = if candidate.is_file() {
                "EXISTS"
            } else {
                "NOT FOUND"
            };
            report.push_str(&format!("  {}. {:?} - {}\n", i + 1, candidate, status));
        }

        let active = match config_override {
            Some(path) => format!("{:?} (override)", path),
            None => Self::find_config_file()
                .map(|path| format!("{:?}", path))
                .unwrap_or_else(|| "Built-in defaults".to_string()),
        };
        report.push_str(&format!("\nActive configuration: {}\n\n", active));
        report.push_str(&Self::load(config_override)?.to_toml_string()?);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TaskbookConfig::default();
        assert_eq!(config.log_filter, "taskbook=info");
        assert_eq!(config.assignee, "John");
        assert!(config.today.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = TaskbookConfig::from_toml_str("assignee = \"Jane\"\n").unwrap();
        assert_eq!(config.assignee, "Jane");
        assert_eq!(config.reminder_message, "Don't forget!");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let error = TaskbookConfig::from_toml_str("asignee = \"Jane\"\n").unwrap_err();
        assert!(format!("{:#}", error).contains("asignee"));
    }

    #[test]
    fn test_load_with_source_reports_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "assignee = \"Ops\"\n").unwrap();

        let (config, source) = ConfigDiscovery::load_with_source(Some(path.as_path())).unwrap();
        assert_eq!(config.assignee, "Ops");
        assert_eq!(source, Some(path));
    }

    #[test]
    fn test_invalid_today_rejected() {
        let error = TaskbookConfig::from_toml_str("today = \"2023/05/01\"\n").unwrap_err();
        assert!(format!("{:#}", error).contains("Invalid `today`"));
    }

    #[test]
    fn test_fixed_clock_from_config() {
        let config = TaskbookConfig {
            today: Some("2023-05-01".to_string()),
            ..Default::default()
        };
        let clock = config.clock().unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2023, 5, 1).unwrap());
    }

    #[test]
    fn test_discovery_precedence() {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();

        assert_eq!(
            ConfigDiscovery::find_config_file_in(Some(work.path()), Some(home.path())),
            None
        );

        let user_config = env::user_config_file_path(home.path());
        fs::create_dir_all(user_config.parent().unwrap()).unwrap();
        TaskbookConfig::default().to_toml_file(&user_config).unwrap();
        assert_eq!(
            ConfigDiscovery::find_config_file_in(Some(work.path()), Some(home.path())),
            Some(user_config)
        );

        let local_config = work.path().join(env::LOCAL_CONFIG_FILE_NAME);
        TaskbookConfig::default().to_toml_file(&local_config).unwrap();
        assert_eq!(
            ConfigDiscovery::find_config_file_in(Some(work.path()), Some(home.path())),
            Some(local_config)
        );
    }

    #[test]
    fn test_config_candidates_order() {
        let candidates =
            ConfigDiscovery::config_candidates(Some(Path::new("/work")), Some(Path::new("/home/me")));
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].file_name().unwrap(), "taskbook.toml");
        assert_eq!(candidates[2], PathBuf::from("/home/me/.taskbook/config.toml"));
    }
}
