// SPDX-License-Identifier: PMPL-1.0-or-later

//! Root-level dependency manifest inspection

use crate::types::{DependencyReport, SkipStage, SkippedItem};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Manifests looked up in the snapshot root only
pub const MANIFEST_FILES: &[&str] = &[
    "requirements.txt",
    "requirements.in",
    "pyproject.toml",
    "setup.py",
    "Pipfile",
];

/// Package identifiers that indicate i18n tooling
pub const I18N_PACKAGES: &[&str] = &[
    "streamlit-i18n",
    "babel",
    "gettext",
    "python-gettext",
    "flask-babel",
    "django-rosetta",
    "polib",
    "translate",
];

pub struct DependencyInspector;

impl DependencyInspector {
    /// Inspect the manifests present in `root`.
    ///
    /// A manifest that exists but cannot be read is left out of both lists
    /// and reported as skipped.
    pub fn inspect(root: &Path) -> (DependencyReport, Vec<SkippedItem>) {
        let mut report = DependencyReport::default();
        let mut skipped = Vec::new();

        for manifest in MANIFEST_FILES {
            let path = root.join(manifest);
            if !path.is_file() {
                continue;
            }

            match read_manifest(&path) {
                Ok(content) => {
                    let found = packages_in(&content);
                    debug!("{}: {} i18n package hits", manifest, found.len());
                    report.requirements_files.push(manifest.to_string());
                    report.i18n_packages.extend(found);
                }
                Err(e) => {
                    debug!("skipping manifest {}: {:#}", manifest, e);
                    skipped.push(SkippedItem::new(
                        *manifest,
                        SkipStage::Manifest,
                        format!("{:#}", e),
                    ));
                }
            }
        }

        (report, skipped)
    }
}

/// Read a manifest as strict UTF-8; undecodable bytes are a read failure
fn read_manifest(path: &Path) -> Result<String> {
    let raw_bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    encoding_rs::UTF_8
        .decode_without_bom_handling_and_without_replacement(&raw_bytes)
        .map(|text| text.into_owned())
        .with_context(|| format!("{} is not valid UTF-8", path.display()))
}

/// Known packages mentioned anywhere in `content`, case-insensitively
pub fn packages_in(content: &str) -> Vec<String> {
    let lowered = content.to_lowercase();
    I18N_PACKAGES
        .iter()
        .filter(|package| lowered.contains(**package))
        .map(|package| package.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn substring_hits_include_overlapping_names() {
        // "flask-babel" also contains "babel"
        let found = packages_in("Flask-Babel==4.0\n");
        assert_eq!(found, vec!["babel", "flask-babel"]);
    }

    #[test]
    fn no_manifests_means_empty_report() {
        let dir = TempDir::new().unwrap();
        let (report, skipped) = DependencyInspector::inspect(dir.path());
        assert!(report.requirements_files.is_empty());
        assert!(report.i18n_packages.is_empty());
        assert!(skipped.is_empty());
    }

    #[test]
    fn manifests_are_not_searched_recursively() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/requirements.txt"), "polib\n").unwrap();

        let (report, _) = DependencyInspector::inspect(dir.path());
        assert!(report.requirements_files.is_empty());
    }

    #[test]
    fn directory_named_like_a_manifest_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("requirements.txt")).unwrap();

        let (report, skipped) = DependencyInspector::inspect(dir.path());
        assert!(report.requirements_files.is_empty());
        assert!(skipped.is_empty());
    }

    #[test]
    fn undecodable_manifest_is_skipped_and_left_out_of_both_lists() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("requirements.txt"), b"babel\n\xff\xfe\n").unwrap();
        fs::write(dir.path().join("Pipfile"), "[packages]\npolib = \"*\"\n").unwrap();

        let (report, skipped) = DependencyInspector::inspect(dir.path());

        assert_eq!(report.requirements_files, vec!["Pipfile"]);
        assert_eq!(report.i18n_packages, vec!["polib"]);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].path, "requirements.txt");
        assert_eq!(skipped[0].stage, SkipStage::Manifest);
        assert!(skipped[0].reason.contains("UTF-8"));
    }
}
