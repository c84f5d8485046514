//! Configuration handling for the wizard

use crate::state::{FormState, DEFAULT_END_DATE, DEFAULT_JOINING_YEAR};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No config file exists
    Defaults,
}

/// User configuration for the wizard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WizardConfig {
    /// Initial value of the joining year field
    pub default_joining_year: Option<String>,
    /// Initial value of the end year field
    pub default_end_date: Option<String>,
    /// Directory exported summaries are written to
    pub export_dir: Option<PathBuf>,
}

impl WizardConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "formwizard", "form-wizard")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory the log file is written to
    pub fn log_dir() -> PathBuf {
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join("logs"))
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Load configuration from the platform config file
    pub fn load() -> Result<(Self, ConfigSource)> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// Load configuration from `path`, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<(Self, ConfigSource)> {
        if !path.exists() {
            return Ok((Self::default(), ConfigSource::Defaults));
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: WizardConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    pub fn joining_year_seed(&self) -> &str {
        self.default_joining_year
            .as_deref()
            .unwrap_or(DEFAULT_JOINING_YEAR)
    }

    pub fn end_date_seed(&self) -> &str {
        self.default_end_date.as_deref().unwrap_or(DEFAULT_END_DATE)
    }

    /// Fresh form record seeded from this configuration
    pub fn initial_form(&self) -> FormState {
        FormState::with_seeds(self.joining_year_seed(), self.end_date_seed())
    }

    /// Export directory: configured, else the platform data dir, else `.`
    pub fn resolved_export_dir(&self) -> PathBuf {
        if let Some(dir) = &self.export_dir {
            return dir.clone();
        }
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join("exports"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
