// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output

use crate::report::output::{ExportDocument, ReportOutputFormat};
use crate::translation::TranslationFormat;
use crate::types::*;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, source: &str, report: &AnalysisReport) {
        println!("\n{}", "=== MULTILINGUAL SUPPORT REPORT ===".bold().cyan());
        println!("  Source: {}", source);
        println!();

        self.print_status(report);
        println!();

        self.print_evidence(report);
        println!();

        self.print_recommendations(report);
        println!();

        if report.is_multilingual {
            println!(
                "{}",
                "This application appears to support English and/or Indic languages.".green()
            );
        } else {
            println!(
                "{}",
                "This application does not appear to support English and Indic languages."
                    .yellow()
            );
        }
    }

    fn print_status(&self, report: &AnalysisReport) {
        println!("{}", "STATUS".bold().yellow());

        let status = if report.is_multilingual {
            "Yes".green().bold()
        } else {
            "No".red().bold()
        };
        let score_color = if report.confidence_score >= 70 {
            "green"
        } else if report.confidence_score >= 30 {
            "yellow"
        } else {
            "red"
        };

        println!("  Multilingual: {}", status);
        println!(
            "  Confidence: {}/100",
            report.confidence_score.to_string().color(score_color).bold()
        );
        println!(
            "    patterns +{}  translations +{}  dependencies +{}  languages +{}",
            report.score_breakdown.patterns,
            report.score_breakdown.translations,
            report.score_breakdown.dependencies,
            report.score_breakdown.languages
        );
        println!("  Streamlit files: {}", report.candidate_files.len());
        if !report.skipped.is_empty() {
            println!("  Skipped items: {}", report.skipped.len().to_string().dimmed());
        }
    }

    fn print_evidence(&self, report: &AnalysisReport) {
        println!("{}", "EVIDENCE".bold().yellow());

        if report.pattern_matches.is_empty() {
            println!("  i18n patterns: none");
        } else {
            println!("  i18n patterns:");
            for (file, categories) in &report.pattern_matches {
                let names: Vec<&str> = categories.keys().map(|c| c.as_str()).collect();
                println!("    {} {}", file, format!("[{}]", names.join(", ")).dimmed());
            }
        }

        if report.has_translation_files() {
            println!("  Translation files:");
            for format in TranslationFormat::all() {
                let files = match report.translation_files.get(&format) {
                    Some(files) if !files.is_empty() => files,
                    _ => continue,
                };
                println!("    {}:", format.label());
                for file in files {
                    println!("      {}", file);
                }
            }
        } else {
            println!("  Translation files: none");
        }

        if report.dependency_report.i18n_packages.is_empty() {
            println!("  i18n packages: none");
        } else {
            println!(
                "  i18n packages: {}",
                report.dependency_report.i18n_packages.join(", ")
            );
        }

        let languages: Vec<&str> = report.detected_languages.iter().map(|l| l.name()).collect();
        println!(
            "  Detected languages: {}",
            if languages.is_empty() {
                "none".to_string()
            } else {
                languages.join(", ")
            }
        );
    }

    fn print_recommendations(&self, report: &AnalysisReport) {
        println!("{}", "RECOMMENDATIONS".bold().yellow());
        for (i, rec) in report.recommendations.iter().enumerate() {
            println!("  {}. {}", i + 1, rec);
        }
    }

    pub fn save<P: AsRef<Path>>(
        &self,
        document: &ExportDocument,
        format: ReportOutputFormat,
        path: P,
    ) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let content = format.serialize(document)?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        println!("Report saved to: {}", path.display());
        Ok(())
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
