// SPDX-License-Identifier: PMPL-1.0-or-later

//! Confidence scoring and recommendation generation

use crate::config::ScoringConfig;
use crate::types::ScoreBreakdown;

/// Boolean evidence collected by the detectors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signals {
    pub has_patterns: bool,
    pub has_translation_files: bool,
    pub has_i18n_packages: bool,
    pub language_count: usize,
}

/// Outcome of scoring one analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub breakdown: ScoreBreakdown,
    pub confidence_score: u32,
    pub is_multilingual: bool,
    pub recommendations: Vec<String>,
}

pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn breakdown(&self, signals: &Signals) -> ScoreBreakdown {
        let weight = |present: bool, value: u32| if present { value } else { 0 };

        ScoreBreakdown {
            patterns: weight(signals.has_patterns, self.config.pattern_weight),
            translations: weight(signals.has_translation_files, self.config.translation_weight),
            dependencies: weight(signals.has_i18n_packages, self.config.dependency_weight),
            languages: weight(signals.language_count > 1, self.config.language_weight),
        }
    }

    pub fn assess(&self, signals: &Signals) -> Assessment {
        let breakdown = self.breakdown(signals);
        let confidence_score = breakdown.total().min(self.config.max_score);
        let is_multilingual = confidence_score >= self.config.multilingual_threshold;

        Assessment {
            breakdown,
            confidence_score,
            is_multilingual,
            recommendations: Self::recommendations(signals, is_multilingual),
        }
    }

    fn recommendations(signals: &Signals, is_multilingual: bool) -> Vec<String> {
        let mut recommendations = Vec::new();

        if !is_multilingual {
            recommendations.push(
                "Consider implementing internationalization for English and Indic languages using libraries like streamlit-i18n or gettext"
                    .to_string(),
            );
            recommendations.push(
                "Add language selection widget with English and Indic language options".to_string(),
            );
            recommendations.push(
                "Create translation files for target Indic languages (Hindi, Bengali, Tamil, etc.)"
                    .to_string(),
            );
            recommendations
                .push("Consider using Unicode fonts that support Indic scripts".to_string());
            return recommendations;
        }

        if !signals.has_i18n_packages {
            recommendations.push("Document your i18n dependencies in requirements.txt".to_string());
        }
        if !signals.has_translation_files {
            recommendations.push(
                "Consider using standard translation file formats (.po, .json) for Indic languages"
                    .to_string(),
            );
        }
        recommendations.push(
            "Ensure proper Unicode support for Indic scripts in your application".to_string(),
        );
        recommendations.push("Test your application with different Indic language inputs".to_string());

        recommendations
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
