// SPDX-License-Identifier: PMPL-1.0-or-later

//! Candidate file discovery
//!
//! Walks the snapshot and keeps Python sources that look like Streamlit
//! applications. Unreadable files come back as [`SkippedItem`]s instead of
//! aborting the walk.

use crate::translation::{is_hidden_dir, relative_path};
use crate::types::{SkipStage, SkippedItem};
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Directory names never descended into
pub const EXCLUDED_DIRS: &[&str] = &["__pycache__", "node_modules"];

const SOURCE_EXTENSION: &str = "py";

/// A discovered candidate with its decoded content
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub relative: String,
    pub content: String,
}

/// Candidates plus everything that had to be skipped
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<SourceFile>,
    pub skipped: Vec<SkippedItem>,
}

pub struct FileDiscovery;

impl FileDiscovery {
    /// Enumerate candidate files in filesystem order.
    pub fn discover(root: &Path) -> Discovery {
        let mut discovery = Discovery::default();

        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_excluded_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| relative_path(root, p))
                        .unwrap_or_default();
                    discovery
                        .skipped
                        .push(SkippedItem::new(path, SkipStage::Discovery, e));
                    continue;
                }
            };
            // Symlinked directories are not descended, symlinked files are read
            if !entry.path().is_file() || !has_source_extension(entry.path()) {
                continue;
            }

            let relative = relative_path(root, entry.path());
            match load_candidate(entry.path(), &relative) {
                Ok(Some(file)) => discovery.files.push(file),
                Ok(None) => {}
                Err(skip) => {
                    debug!("skipping {}: {}", skip.path, skip.reason);
                    discovery.skipped.push(skip);
                }
            }
        }

        discovery
    }
}

fn is_excluded_dir(entry: &walkdir::DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    is_hidden_dir(entry) || EXCLUDED_DIRS.contains(&name.as_ref())
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == SOURCE_EXTENSION)
        .unwrap_or(false)
}

/// Read and decode `path`; `Ok(None)` when it is not a Streamlit file
fn load_candidate(path: &Path, relative: &str) -> Result<Option<SourceFile>, SkippedItem> {
    let content = read_text(path)
        .map_err(|e| SkippedItem::new(relative, SkipStage::Discovery, e))?;

    if !is_streamlit_source(&content) {
        return Ok(None);
    }

    Ok(Some(SourceFile {
        relative: relative.to_string(),
        content,
    }))
}

/// Framework marker: the word "streamlit" in any case, or the `st.` idiom
pub fn is_streamlit_source(content: &str) -> bool {
    content.to_lowercase().contains("streamlit") || content.contains("st.")
}

/// Read a file as text, replacing invalid UTF-8 rather than failing
fn read_text(path: &Path) -> std::io::Result<String> {
    let raw_bytes = fs::read(path)?;
    let (text, _, _) = encoding_rs::UTF_8.decode(&raw_bytes);
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, rel: &str, body: &[u8]) {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, body).unwrap();
    }

    #[test]
    fn keeps_only_streamlit_python_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "app.py", b"import streamlit as st\nst.title('x')\n");
        write(&dir, "util.py", b"def add(a, b):\n    return a + b\n");
        write(&dir, "page.js", b"// streamlit component\n");

        let found = FileDiscovery::discover(dir.path());
        let names: Vec<_> = found.files.iter().map(|f| f.relative.as_str()).collect();
        assert_eq!(names, vec!["app.py"]);
        assert!(found.skipped.is_empty());
    }

    #[test]
    fn marker_is_case_insensitive_word_or_st_idiom() {
        assert!(is_streamlit_source("# Built with STREAMLIT"));
        assert!(is_streamlit_source("st.sidebar.header('a')"));
        assert!(!is_streamlit_source("ST.sidebar"));
        assert!(!is_streamlit_source("print('hello')"));
    }

    #[test]
    fn excluded_and_hidden_directories_are_not_walked() {
        let dir = TempDir::new().unwrap();
        write(&dir, ".venv/lib/site.py", b"import streamlit");
        write(&dir, "node_modules/pkg/x.py", b"import streamlit");
        write(&dir, "__pycache__/app.py", b"import streamlit");
        write(&dir, "src/main.py", b"import streamlit");

        let found = FileDiscovery::discover(dir.path());
        assert_eq!(found.files.len(), 1);
        assert_eq!(found.files[0].relative, Path::new("src").join("main.py").to_string_lossy());
    }

    #[test]
    fn build_and_dist_packages_are_walked() {
        let dir = TempDir::new().unwrap();
        write(&dir, "build/app.py", b"import streamlit\nimport gettext\n");
        write(&dir, "dist/ui.py", b"st.write('x')\n");

        let found = FileDiscovery::discover(dir.path());
        let mut names: Vec<_> = found.files.iter().map(|f| f.relative.clone()).collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                Path::new("build").join("app.py").to_string_lossy().to_string(),
                Path::new("dist").join("ui.py").to_string_lossy().to_string(),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_sources_are_read_but_linked_dirs_are_not_walked() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        write(&dir, "src/real.txt", b"import streamlit\nimport gettext\n");
        write(&dir, "vendor/lib.py", b"import streamlit\n");
        symlink(dir.path().join("src/real.txt"), dir.path().join("app.py")).unwrap();
        symlink(dir.path().join("vendor"), dir.path().join("linked")).unwrap();

        let found = FileDiscovery::discover(dir.path());
        let mut names: Vec<_> = found.files.iter().map(|f| f.relative.clone()).collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "app.py".to_string(),
                Path::new("vendor").join("lib.py").to_string_lossy().to_string(),
            ]
        );
        assert!(found.files.iter().any(|f| f.content.contains("gettext")));
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let dir = TempDir::new().unwrap();
        write(&dir, "app.py", b"import streamlit\n# \xff\xfe broken\n");

        let found = FileDiscovery::discover(dir.path());
        assert_eq!(found.files.len(), 1);
        assert!(found.files[0].content.contains('\u{FFFD}'));
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let found = FileDiscovery::discover(dir.path());
        assert!(found.files.is_empty());
        assert!(found.skipped.is_empty());
    }
}
