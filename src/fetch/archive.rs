// SPDX-License-Identifier: PMPL-1.0-or-later

//! Zip extraction into the snapshot directory

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{self, Cursor};
use std::path::{Component, Path, PathBuf};
use zip::ZipArchive;

const UNWRAP_DIR: &str = ".i18n-scout-unwrap";

/// Extract `bytes` into `dest`, then lift a lone wrapper directory.
pub fn unpack(bytes: &[u8], dest: &Path) -> Result<()> {
    extract_zip(bytes, dest)?;
    flatten_single_root(dest)
}

pub fn extract_zip(bytes: &[u8], dest: &Path) -> Result<()> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).context("reading zip archive")?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("reading zip entry {}", i))?;
        let rel = sanitize_entry_path(entry.name())?;
        if rel.as_os_str().is_empty() {
            continue;
        }
        let out_path = dest.join(&rel);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)
                .with_context(|| format!("creating {}", out_path.display()))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let mut out = fs::File::create(&out_path)
            .with_context(|| format!("writing {}", out_path.display()))?;
        io::copy(&mut entry, &mut out)
            .with_context(|| format!("writing {}", out_path.display()))?;
    }

    Ok(())
}

/// Reject absolute paths and `..` components
fn sanitize_entry_path(name: &str) -> Result<PathBuf> {
    let mut out = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            _ => bail!("unsafe path in archive: {}", name),
        }
    }
    Ok(out)
}

/// If `dest` holds exactly one directory and nothing else, move that
/// directory's contents up into `dest` and remove it.
pub fn flatten_single_root(dest: &Path) -> Result<()> {
    let entries: Vec<PathBuf> = fs::read_dir(dest)
        .with_context(|| format!("listing {}", dest.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();

    if entries.len() != 1 || !entries[0].is_dir() {
        return Ok(());
    }

    // Rename first so a child sharing the wrapper's name can move up.
    let wrapper = dest.join(UNWRAP_DIR);
    fs::rename(&entries[0], &wrapper)
        .with_context(|| format!("renaming {}", entries[0].display()))?;

    for child in fs::read_dir(&wrapper)? {
        let child = child?;
        let target = dest.join(child.file_name());
        fs::rename(child.path(), &target)
            .with_context(|| format!("moving {}", target.display()))?;
    }
    fs::remove_dir(&wrapper).with_context(|| format!("removing {}", wrapper.display()))?;

    Ok(())
}

/// Remove everything inside `dest`, keeping the directory itself
pub fn clear_directory(dest: &Path) -> Result<()> {
    for entry in fs::read_dir(dest).with_context(|| format!("listing {}", dest.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        }
        .with_context(|| format!("removing {}", path.display()))?;
    }
    Ok(())
}
