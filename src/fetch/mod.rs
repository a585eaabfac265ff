// SPDX-License-Identifier: PMPL-1.0-or-later

//! Repository acquisition
//!
//! Strategies from a [`FetchPolicy`] are tried strictly in order and the
//! first success wins. Every failure is recorded and swallowed; the caller
//! only sees whether acquisition succeeded. After a failed attempt the
//! target directory is emptied so the next strategy starts clean.

pub mod archive;
pub mod strategy;
pub mod transport;

pub use strategy::{FetchPolicy, RepoLocation, StrategyDescriptor, StrategyKind};
pub use transport::{HttpResponse, SystemTransport, Transport};

use anyhow::{bail, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Record of one strategy attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyAttempt {
    pub strategy: String,
    pub kind: StrategyKind,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StrategyAttempt {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchOutcome {
    pub attempts: Vec<StrategyAttempt>,
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        self.attempts.last().is_some_and(StrategyAttempt::succeeded)
    }

    pub fn winning_strategy(&self) -> Option<&StrategyAttempt> {
        self.attempts.last().filter(|attempt| attempt.succeeded())
    }
}

pub struct RepositoryFetcher<T: Transport> {
    transport: T,
    policy: FetchPolicy,
}

impl<T: Transport> RepositoryFetcher<T> {
    pub fn new(transport: T, policy: FetchPolicy) -> Self {
        Self { transport, policy }
    }

    /// Populate the empty directory `dest` with the repository at `location`.
    pub fn fetch(&self, location: &RepoLocation, dest: &Path) -> FetchOutcome {
        let mut outcome = FetchOutcome::default();

        for descriptor in &self.policy.strategies {
            let target = match descriptor.target(location) {
                Ok(target) => target,
                Err(e) => {
                    debug!("{}: not applicable ({})", descriptor, e);
                    outcome.attempts.push(StrategyAttempt {
                        strategy: descriptor.to_string(),
                        kind: descriptor.kind(),
                        target: String::new(),
                        error: Some(e.to_string()),
                    });
                    continue;
                }
            };

            debug!("trying {} -> {}", descriptor, target);
            let result = self.run(descriptor, &target, dest);

            let error = match result {
                Ok(()) => {
                    info!("acquired {} via {}", location.url, descriptor);
                    None
                }
                Err(e) => {
                    debug!("{} failed: {:#}", descriptor, e);
                    if let Err(clean_err) = archive::clear_directory(dest) {
                        warn!("could not reset {}: {:#}", dest.display(), clean_err);
                    }
                    Some(format!("{:#}", e))
                }
            };

            let succeeded = error.is_none();
            outcome.attempts.push(StrategyAttempt {
                strategy: descriptor.to_string(),
                kind: descriptor.kind(),
                target,
                error,
            });
            if succeeded {
                return outcome;
            }
        }

        warn!("every acquisition strategy failed for {}", location.url);
        outcome
    }

    fn run(&self, descriptor: &StrategyDescriptor, target: &str, dest: &Path) -> Result<()> {
        match descriptor.kind() {
            StrategyKind::GitClone => {
                self.transport
                    .clone_repository(target, dest, descriptor.timeout)
            }
            StrategyKind::ArchiveDownload => {
                let response = self.transport.get(target, descriptor.timeout)?;
                if response.status != 200 {
                    bail!("HTTP {}", response.status);
                }
                archive::unpack(&response.body, dest)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::time::Duration;
    use tempfile::TempDir;

    struct FailingTransport {
        calls: RefCell<Vec<String>>,
    }

    impl Transport for FailingTransport {
        fn clone_repository(&self, url: &str, dest: &Path, _: Duration) -> Result<()> {
            self.calls.borrow_mut().push(url.to_string());
            // leave debris behind like a half-finished clone
            std::fs::write(dest.join("partial"), "x")?;
            bail!("connection refused")
        }

        fn get(&self, url: &str, _: Duration) -> Result<HttpResponse> {
            self.calls.borrow_mut().push(url.to_string());
            Ok(HttpResponse {
                status: 404,
                body: Vec::new(),
            })
        }
    }

    #[test]
    fn exhausting_strategies_reports_failure_and_leaves_dest_empty() {
        let dir = TempDir::new().unwrap();
        let transport = FailingTransport {
            calls: RefCell::new(Vec::new()),
        };
        let fetcher = RepositoryFetcher::new(transport, FetchPolicy::default());
        let location = RepoLocation::parse("https://gitlab.com/alice/app").unwrap();

        let outcome = fetcher.fetch(&location, dir.path());

        assert!(!outcome.is_success());
        assert!(outcome.winning_strategy().is_none());
        assert_eq!(outcome.attempts.len(), 5);
        assert_eq!(fetcher.transport.calls.borrow().len(), 5);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
