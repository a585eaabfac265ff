// SPDX-License-Identifier: PMPL-1.0-or-later

//! Acquisition strategies and the ordered policy that runs them

use crate::config::FetchConfig;
use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use url::Url;

/// How a strategy obtains the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    GitClone,
    ArchiveDownload,
}

/// Shape of a forge's archive endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveLayout {
    /// `<root>/<owner>/<repo>/-/archive/<ref>/<repo>-<ref>.zip`
    DashArchive,
    /// `<root>/<owner>/<repo>/repository/archive.zip?ref=<ref>`
    RepositoryArchive,
}

impl ArchiveLayout {
    pub fn all() -> [ArchiveLayout; 2] {
        [ArchiveLayout::DashArchive, ArchiveLayout::RepositoryArchive]
    }
}

/// Generator for the URL a strategy requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlTemplate {
    CloneUrl,
    Archive { layout: ArchiveLayout, branch: String },
}

/// Components of a repository web URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinates {
    /// Scheme, host and any path prefix above the owner
    pub host_root: String,
    pub owner: String,
    pub name: String,
}

/// A parsed repository URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocation {
    pub url: String,
    pub clone_url: String,
    /// `None` when the path is too short to name an owner and repository
    pub coordinates: Option<RepoCoordinates>,
}

impl RepoLocation {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).with_context(|| format!("invalid URL: {}", raw))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("URL must start with http:// or https://: {}", raw);
        }
        if parsed.host_str().is_none() {
            bail!("URL has no host: {}", raw);
        }

        Ok(Self {
            url: trimmed.to_string(),
            clone_url: clone_url(trimmed),
            coordinates: coordinates(&parsed),
        })
    }

    /// Last path segment, used to name exports
    pub fn last_segment(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }
}

/// Canonical clone form: the URL with a `.git` suffix
pub fn clone_url(url: &str) -> String {
    if url.ends_with(".git") {
        url.to_string()
    } else {
        format!("{}.git", url)
    }
}

fn coordinates(url: &Url) -> Option<RepoCoordinates> {
    let segments: Vec<&str> = url
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .collect();
    if segments.len() < 2 {
        return None;
    }

    let (prefix, tail) = segments.split_at(segments.len() - 2);
    let mut host_root = url.origin().ascii_serialization();
    for segment in prefix {
        host_root.push('/');
        host_root.push_str(segment);
    }

    Some(RepoCoordinates {
        host_root,
        owner: tail[0].to_string(),
        name: tail[1].trim_end_matches(".git").to_string(),
    })
}

/// One entry of the acquisition policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyDescriptor {
    pub template: UrlTemplate,
    pub timeout: Duration,
}

impl StrategyDescriptor {
    pub fn kind(&self) -> StrategyKind {
        match self.template {
            UrlTemplate::CloneUrl => StrategyKind::GitClone,
            UrlTemplate::Archive { .. } => StrategyKind::ArchiveDownload,
        }
    }

    /// URL this strategy requests for `location`
    pub fn target(&self, location: &RepoLocation) -> Result<String> {
        match &self.template {
            UrlTemplate::CloneUrl => Ok(location.clone_url.clone()),
            UrlTemplate::Archive { layout, branch } => {
                let repo = location
                    .coordinates
                    .as_ref()
                    .ok_or_else(|| anyhow!("cannot derive owner/repository from {}", location.url))?;
                Ok(archive_url(repo, *layout, branch))
            }
        }
    }
}

impl fmt::Display for StrategyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.template {
            UrlTemplate::CloneUrl => write!(f, "git clone"),
            UrlTemplate::Archive { layout, branch } => {
                let shape = match layout {
                    ArchiveLayout::DashArchive => "-/archive",
                    ArchiveLayout::RepositoryArchive => "repository/archive",
                };
                write!(f, "archive {} ({})", shape, branch)
            }
        }
    }
}

pub fn archive_url(repo: &RepoCoordinates, layout: ArchiveLayout, branch: &str) -> String {
    let base = format!("{}/{}/{}", repo.host_root, repo.owner, repo.name);
    match layout {
        ArchiveLayout::DashArchive => {
            format!("{}/-/archive/{}/{}-{}.zip", base, branch, repo.name, branch)
        }
        ArchiveLayout::RepositoryArchive => {
            format!("{}/repository/archive.zip?ref={}", base, branch)
        }
    }
}

/// Ordered strategy list; the first success ends acquisition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPolicy {
    pub strategies: Vec<StrategyDescriptor>,
}

impl FetchPolicy {
    /// Direct clone first, then every archive layout for every branch
    pub fn from_config(config: &FetchConfig) -> Self {
        let mut strategies = vec![StrategyDescriptor {
            template: UrlTemplate::CloneUrl,
            timeout: config.clone_timeout(),
        }];

        for layout in ArchiveLayout::all() {
            for branch in &config.branches {
                strategies.push(StrategyDescriptor {
                    template: UrlTemplate::Archive {
                        layout,
                        branch: branch.clone(),
                    },
                    timeout: config.archive_timeout(),
                });
            }
        }

        Self { strategies }
    }
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self::from_config(&FetchConfig::default())
    }
}
