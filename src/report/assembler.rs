// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runs every detector over a snapshot and assembles the report

use crate::config::ScoringConfig;
use crate::dependencies::DependencyInspector;
use crate::discovery::FileDiscovery;
use crate::languages::LanguageContentDetector;
use crate::patterns::PatternDetector;
use crate::scoring::{ScoringEngine, Signals};
use crate::translation::TranslationFileIndex;
use crate::types::*;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

pub struct ReportAssembler {
    scoring: ScoringEngine,
}

impl ReportAssembler {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            scoring: ScoringEngine::new(config),
        }
    }

    /// Analyse the tree at `root`. Unreadable items are skipped, never fatal.
    pub fn assemble(&self, root: &Path) -> AnalysisReport {
        let discovery = FileDiscovery::discover(root);
        let mut skipped = discovery.skipped;

        let mut candidate_files = Vec::with_capacity(discovery.files.len());
        let mut pattern_matches = PatternMatches::new();
        let mut detected_languages = BTreeSet::new();

        for file in &discovery.files {
            candidate_files.push(file.relative.clone());

            let patterns = PatternDetector::detect(&file.content);
            if !patterns.is_empty() {
                debug!("{}: {} pattern categories", file.relative, patterns.len());
                pattern_matches.insert(file.relative.clone(), patterns);
            }

            detected_languages.extend(LanguageContentDetector::detect(&file.content));
        }

        let translation_files = TranslationFileIndex::build(root);
        let (dependency_report, manifest_skips) = DependencyInspector::inspect(root);
        skipped.extend(manifest_skips);

        let signals = Signals {
            has_patterns: !pattern_matches.is_empty(),
            has_translation_files: translation_files.values().any(|files| !files.is_empty()),
            has_i18n_packages: !dependency_report.i18n_packages.is_empty(),
            language_count: detected_languages.len(),
        };
        let assessment = self.scoring.assess(&signals);

        info!(
            "analysed {} candidate files: score {} ({} skipped)",
            candidate_files.len(),
            assessment.confidence_score,
            skipped.len()
        );

        AnalysisReport {
            is_multilingual: assessment.is_multilingual,
            confidence_score: assessment.confidence_score,
            candidate_files,
            pattern_matches,
            translation_files,
            detected_languages,
            dependency_report,
            recommendations: assessment.recommendations,
            score_breakdown: assessment.breakdown,
            skipped,
        }
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
