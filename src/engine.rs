// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fetch-then-analyze entry point
//!
//! Each run owns one temporary snapshot directory, created before the fetch
//! and removed when the run returns on any path.

use crate::config::Config;
use crate::fetch::{FetchOutcome, FetchPolicy, RepoLocation, RepositoryFetcher, SystemTransport, Transport};
use crate::report::ReportAssembler;
use crate::types::AnalysisReport;
use std::path::Path;
use tracing::{info, warn};

/// Result of one repository check
#[derive(Debug)]
pub enum CheckOutcome {
    Analyzed {
        report: AnalysisReport,
        fetch: FetchOutcome,
    },
    FetchFailed {
        fetch: FetchOutcome,
    },
}

impl CheckOutcome {
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            CheckOutcome::Analyzed { report, .. } => Some(report),
            CheckOutcome::FetchFailed { .. } => None,
        }
    }

    pub fn fetch(&self) -> &FetchOutcome {
        match self {
            CheckOutcome::Analyzed { fetch, .. } | CheckOutcome::FetchFailed { fetch } => fetch,
        }
    }

    pub fn fetched(&self) -> bool {
        matches!(self, CheckOutcome::Analyzed { .. })
    }
}

pub struct Engine<T: Transport> {
    fetcher: RepositoryFetcher<T>,
    assembler: ReportAssembler,
}

impl Engine<SystemTransport> {
    pub fn from_config(config: &Config) -> Self {
        Self::with_transport(SystemTransport::new(config.fetch.git_program.clone()), config)
    }
}

impl<T: Transport> Engine<T> {
    pub fn with_transport(transport: T, config: &Config) -> Self {
        Self {
            fetcher: RepositoryFetcher::new(transport, FetchPolicy::from_config(&config.fetch)),
            assembler: ReportAssembler::new(config.scoring),
        }
    }

    /// Acquire `location` into a fresh temporary directory and analyse it.
    pub fn check(&self, location: &RepoLocation) -> CheckOutcome {
        let snapshot = match tempfile::Builder::new().prefix("i18n-scout-").tempdir() {
            Ok(dir) => dir,
            Err(e) => {
                warn!("could not create snapshot directory: {}", e);
                return CheckOutcome::FetchFailed {
                    fetch: FetchOutcome::default(),
                };
            }
        };

        let outcome = self.check_into(location, snapshot.path());

        if let Err(e) = snapshot.close() {
            warn!("could not remove snapshot directory: {}", e);
        }
        outcome
    }

    /// Same as [`Engine::check`] but with a caller-owned empty directory
    pub fn check_into(&self, location: &RepoLocation, snapshot: &Path) -> CheckOutcome {
        info!("checking {}", location.url);
        let fetch = self.fetcher.fetch(location, snapshot);
        if !fetch.is_success() {
            return CheckOutcome::FetchFailed { fetch };
        }

        let report = self.assembler.assemble(snapshot);
        CheckOutcome::Analyzed { report, fetch }
    }

    /// Analyse a tree that is already on disk
    pub fn scan(&self, root: &Path) -> AnalysisReport {
        self.assembler.assemble(root)
    }
}

/// Convenience wrapper using the system `git` and HTTP client
pub fn check_repository(location: &RepoLocation, config: &Config) -> CheckOutcome {
    Engine::from_config(config).check(location)
}
