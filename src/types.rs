// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core report types for i18n-scout

use crate::languages::LanguageKey;
use crate::patterns::FilePatterns;
use crate::translation::TranslationFormat;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Pattern matches keyed by snapshot-relative file path
pub type PatternMatches = BTreeMap<String, FilePatterns>;

/// Translation artifacts keyed by format bucket
pub type TranslationFiles = BTreeMap<TranslationFormat, Vec<String>>;

/// Pipeline stage at which an item was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipStage {
    Discovery,
    Manifest,
}

/// A file or manifest that could not be read and contributed nothing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedItem {
    pub path: String,
    pub stage: SkipStage,
    pub reason: String,
}

impl SkippedItem {
    pub fn new(path: impl Into<String>, stage: SkipStage, reason: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            stage,
            reason: reason.to_string(),
        }
    }
}

/// Root-level manifests and the i18n packages they mention
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyReport {
    pub requirements_files: Vec<String>,
    /// One entry per (manifest, package) hit; not deduplicated
    pub i18n_packages: Vec<String>,
}

/// The four additive contributions behind `confidence_score`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub patterns: u32,
    pub translations: u32,
    pub dependencies: u32,
    pub languages: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.patterns + self.translations + self.dependencies + self.languages
    }
}

/// Final result of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub is_multilingual: bool,
    pub confidence_score: u32,
    pub candidate_files: Vec<String>,
    pub pattern_matches: PatternMatches,
    pub translation_files: TranslationFiles,
    pub detected_languages: BTreeSet<LanguageKey>,
    pub dependency_report: DependencyReport,
    pub recommendations: Vec<String>,
    pub score_breakdown: ScoreBreakdown,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedItem>,
}

impl AnalysisReport {
    pub fn has_translation_files(&self) -> bool {
        self.translation_files.values().any(|files| !files.is_empty())
    }
}
