// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tunable settings
//!
//! Defaults reproduce the built-in behaviour. A YAML file may override any
//! subset of fields:
//!
//! ```yaml
//! fetch:
//!   clone_timeout_secs: 120
//! scoring:
//!   multilingual_threshold: 40
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}

/// Acquisition settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Executable used for the direct clone attempt
    pub git_program: String,
    pub clone_timeout_secs: u64,
    /// Applies to each archive request separately
    pub archive_timeout_secs: u64,
    /// Default-branch names tried for archive downloads, in order
    pub branches: Vec<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            git_program: "git".to_string(),
            clone_timeout_secs: 60,
            archive_timeout_secs: 30,
            branches: vec!["main".to_string(), "master".to_string()],
        }
    }
}

impl FetchConfig {
    pub fn clone_timeout(&self) -> Duration {
        Duration::from_secs(self.clone_timeout_secs)
    }

    pub fn archive_timeout(&self) -> Duration {
        Duration::from_secs(self.archive_timeout_secs)
    }
}

/// Weights of the additive confidence score and the classification cut-off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Any i18n pattern found in any candidate file
    pub pattern_weight: u32,
    /// Any translation file bucket non-empty
    pub translation_weight: u32,
    /// Any known i18n package in a manifest
    pub dependency_weight: u32,
    /// More than one language detected
    pub language_weight: u32,
    pub multilingual_threshold: u32,
    pub max_score: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            pattern_weight: 40,
            translation_weight: 30,
            dependency_weight: 20,
            language_weight: 10,
            multilingual_threshold: 30,
            max_score: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = Config::from_yaml("scoring:\n  multilingual_threshold: 45\n").unwrap();
        assert_eq!(config.scoring.multilingual_threshold, 45);
        assert_eq!(config.scoring.pattern_weight, 40);
        assert_eq!(config.fetch, FetchConfig::default());
    }

    #[test]
    fn empty_yaml_is_default() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(Config::from_yaml("fetch:\n  clone_timeout_secs: soon\n").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load(Path::new("/nonexistent/i18n-scout.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("reading config"));
    }
}
