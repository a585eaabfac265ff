// SPDX-License-Identifier: PMPL-1.0-or-later

//! Blocking I/O used by the fetch strategies

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Status and body of one HTTP GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The two operations acquisition needs from the outside world
pub trait Transport {
    /// Clone `url` into the existing, empty directory `dest`
    fn clone_repository(&self, url: &str, dest: &Path, timeout: Duration) -> Result<()>;

    /// GET `url`; a non-200 status is a response, not an error
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse>;
}

/// `git` subprocess plus a blocking HTTP client
#[derive(Debug, Clone)]
pub struct SystemTransport {
    git_program: String,
}

impl SystemTransport {
    pub fn new(git_program: impl Into<String>) -> Self {
        Self {
            git_program: git_program.into(),
        }
    }
}

impl Default for SystemTransport {
    fn default() -> Self {
        Self::new("git")
    }
}

impl Transport for SystemTransport {
    fn clone_repository(&self, url: &str, dest: &Path, timeout: Duration) -> Result<()> {
        let mut child = Command::new(&self.git_program)
            .arg("clone")
            .arg("--quiet")
            .arg(url)
            .arg(dest)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("executing {}", self.git_program))?;

        // Drained concurrently so a chatty git never blocks on a full pipe
        let stderr_reader = child.stderr.take().map(|mut pipe| {
            std::thread::spawn(move || {
                let mut buf = String::new();
                let _ = pipe.read_to_string(&mut buf);
                buf
            })
        });

        let started = Instant::now();
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if started.elapsed() >= timeout {
                let _ = child.kill();
                let _ = child.wait();
                bail!("git clone timed out after {}s", timeout.as_secs());
            }
            std::thread::sleep(Duration::from_millis(50));
        };

        if !status.success() {
            let stderr = stderr_reader
                .and_then(|reader| reader.join().ok())
                .unwrap_or_default();
            bail!("git clone exited with {}: {}", status, stderr.trim());
        }

        Ok(())
    }

    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("i18n-scout/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;

        let response = client
            .get(url)
            .send()
            .with_context(|| format!("requesting {}", url))?;
        let status = response.status().as_u16();
        let body = if status == 200 {
            response
                .bytes()
                .with_context(|| format!("reading body of {}", url))?
                .to_vec()
        } else {
            Vec::new()
        };

        Ok(HttpResponse { status, body })
    }
}
