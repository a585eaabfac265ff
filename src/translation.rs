// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation artifact classification
//!
//! Every file under the snapshot (hidden directories excluded) is put into
//! at most one format bucket. Buckets are tested in declaration order; the
//! JSON and YAML buckets additionally need a locale keyword in the file name.

use crate::types::TranslationFiles;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

const NAME_KEYWORDS: &[&str] = &["lang", "translation", "locale", "i18n"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TranslationFormat {
    #[serde(rename = "po_files")]
    Po,
    #[serde(rename = "mo_files")]
    Mo,
    #[serde(rename = "json_translations")]
    Json,
    #[serde(rename = "yaml_translations")]
    Yaml,
    #[serde(rename = "properties_files")]
    Properties,
}

impl TranslationFormat {
    /// Buckets in classification priority order
    pub fn all() -> [TranslationFormat; 5] {
        [
            TranslationFormat::Po,
            TranslationFormat::Mo,
            TranslationFormat::Json,
            TranslationFormat::Yaml,
            TranslationFormat::Properties,
        ]
    }

    pub fn key(self) -> &'static str {
        match self {
            TranslationFormat::Po => "po_files",
            TranslationFormat::Mo => "mo_files",
            TranslationFormat::Json => "json_translations",
            TranslationFormat::Yaml => "yaml_translations",
            TranslationFormat::Properties => "properties_files",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TranslationFormat::Po => "Po Files",
            TranslationFormat::Mo => "Mo Files",
            TranslationFormat::Json => "Json Translations",
            TranslationFormat::Yaml => "Yaml Translations",
            TranslationFormat::Properties => "Properties Files",
        }
    }

    fn extensions(self) -> &'static [&'static str] {
        match self {
            TranslationFormat::Po => &[".po"],
            TranslationFormat::Mo => &[".mo"],
            TranslationFormat::Json => &[".json"],
            TranslationFormat::Yaml => &[".yml", ".yaml"],
            TranslationFormat::Properties => &[".properties"],
        }
    }

    fn needs_keyword(self) -> bool {
        matches!(self, TranslationFormat::Json | TranslationFormat::Yaml)
    }

    fn accepts(self, file_name: &str) -> bool {
        if !self.extensions().iter().any(|ext| file_name.ends_with(ext)) {
            return false;
        }
        if !self.needs_keyword() {
            return true;
        }
        let lowered = file_name.to_lowercase();
        NAME_KEYWORDS.iter().any(|kw| lowered.contains(kw))
    }

    /// First bucket accepting `file_name`, if any
    pub fn classify(file_name: &str) -> Option<TranslationFormat> {
        Self::all().into_iter().find(|format| format.accepts(file_name))
    }
}

/// Empty index with every bucket present
pub fn empty_index() -> TranslationFiles {
    TranslationFormat::all()
        .into_iter()
        .map(|format| (format, Vec::new()))
        .collect()
}

pub struct TranslationFileIndex;

impl TranslationFileIndex {
    /// Classify every file below `root`; paths are returned relative to it.
    pub fn build(root: &Path) -> TranslationFiles {
        let mut index = empty_index();

        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    debug!("translation index: unreadable entry ({})", e);
                    continue;
                }
            };
            if !entry.path().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if let Some(format) = TranslationFormat::classify(&file_name) {
                let rel = relative_path(root, entry.path());
                debug!("translation index: {} -> {}", rel, format.key());
                index.entry(format).or_default().push(rel);
            }
        }

        index
    }
}

pub(crate) fn is_hidden_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name().to_string_lossy().starts_with('.')
}

pub(crate) fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
