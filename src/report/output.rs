// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for exported reports

use crate::fetch::{FetchOutcome, RepoLocation};
use crate::types::AnalysisReport;
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportOutputFormat::Json => "json",
            ReportOutputFormat::Yaml => "yaml",
        }
    }

    pub fn serialize(&self, document: &ExportDocument) -> Result<String> {
        match self {
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(document)?),
        }
    }
}

/// A report wrapped with where it came from and when
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument<'a> {
    pub source: String,
    pub generated_at: String,
    /// Strategy attempts that produced the snapshot; absent for local scans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquisition: Option<&'a FetchOutcome>,
    #[serde(flatten)]
    pub report: &'a AnalysisReport,
}

impl<'a> ExportDocument<'a> {
    pub fn new(source: impl Into<String>, report: &'a AnalysisReport) -> Self {
        Self {
            source: source.into(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            acquisition: None,
            report,
        }
    }

    pub fn with_acquisition(mut self, fetch: &'a FetchOutcome) -> Self {
        self.acquisition = Some(fetch);
        self
    }
}

/// Suggested file name: `multilingual_report_<last URL segment>.<ext>`
pub fn export_file_name(location: &RepoLocation, format: ReportOutputFormat) -> String {
    format!(
        "multilingual_report_{}.{}",
        location.last_segment(),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{StrategyAttempt, StrategyKind};
    use crate::report::ReportAssembler;
    use tempfile::TempDir;

    #[test]
    fn export_name_uses_last_segment() {
        let location = RepoLocation::parse("https://gitlab.com/alice/app").unwrap();
        assert_eq!(
            export_file_name(&location, ReportOutputFormat::Json),
            "multilingual_report_app.json"
        );
        let location = RepoLocation::parse("https://gitlab.com/alice/app/").unwrap();
        assert_eq!(
            export_file_name(&location, ReportOutputFormat::Yaml),
            "multilingual_report_app.yaml"
        );
    }

    #[test]
    fn json_export_flattens_report_fields() {
        let dir = TempDir::new().unwrap();
        let report = ReportAssembler::default().assemble(dir.path());
        let doc = ExportDocument::new("https://gitlab.com/alice/app", &report);

        let json = ReportOutputFormat::Json.serialize(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"], "https://gitlab.com/alice/app");
        assert_eq!(value["confidence_score"], 0);
        assert_eq!(value["is_multilingual"], false);
        assert!(value["detected_languages"].is_array());
        assert!(value["translation_files"]["po_files"].is_array());
        assert!(value["dependency_report"]["i18n_packages"].is_array());
    }

    #[test]
    fn acquisition_attempts_are_exported() {
        let dir = TempDir::new().unwrap();
        let report = ReportAssembler::default().assemble(dir.path());
        let fetch = FetchOutcome {
            attempts: vec![
                StrategyAttempt {
                    strategy: "git clone".to_string(),
                    kind: StrategyKind::GitClone,
                    target: "https://gitlab.com/alice/app.git".to_string(),
                    error: Some("git clone timed out after 60s".to_string()),
                },
                StrategyAttempt {
                    strategy: "archive -/archive (main)".to_string(),
                    kind: StrategyKind::ArchiveDownload,
                    target: "https://gitlab.com/alice/app/-/archive/main/app-main.zip".to_string(),
                    error: None,
                },
            ],
        };
        let doc = ExportDocument::new("https://gitlab.com/alice/app", &report)
            .with_acquisition(&fetch);

        let yaml = ReportOutputFormat::Yaml.serialize(&doc).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        let attempts = value["acquisition"]["attempts"].as_sequence().unwrap();

        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0]["kind"].as_str(), Some("git_clone"));
        assert!(attempts[0]["error"].is_string());
        assert_eq!(attempts[1]["kind"].as_str(), Some("archive_download"));
        assert!(attempts[1].get("error").is_none());
    }

    #[test]
    fn local_scan_export_has_no_acquisition() {
        let dir = TempDir::new().unwrap();
        let report = ReportAssembler::default().assemble(dir.path());
        let doc = ExportDocument::new(dir.path().display().to_string(), &report);

        let json = ReportOutputFormat::Json.serialize(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("acquisition").is_none());
    }
}
