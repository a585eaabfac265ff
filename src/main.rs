// SPDX-License-Identifier: PMPL-1.0-or-later

//! i18n-scout: check whether a repository's Streamlit app supports English
//! and Indic languages
//!
//! Fetches a remote repository, runs the pattern, language, translation-file
//! and dependency detectors over it, and prints or exports the scored report.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::*;
use i18n_scout::config::Config;
use i18n_scout::engine::{CheckOutcome, Engine};
use i18n_scout::fetch::RepoLocation;
use i18n_scout::languages::LanguageKey;
use i18n_scout::report::{
    export_file_name, print_report, save_report, ExportDocument, ReportOutputFormat,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "i18n-scout")]
#[command(version)]
#[command(about = "Detect English and Indic language support in Streamlit repositories")]
#[command(long_about = None)]
struct Cli {
    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML file overriding fetch and scoring settings
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a repository and analyse it
    Check {
        /// Repository URL (http:// or https://)
        #[arg(value_name = "URL")]
        url: String,

        /// Write the report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the report using the suggested multilingual_report_<name> file name
        #[arg(long, conflicts_with = "output")]
        export: bool,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ReportOutputFormat,
    },

    /// Analyse a repository that is already checked out
    Scan {
        /// Directory to analyse
        #[arg(value_name = "DIR")]
        directory: PathBuf,

        /// Write the report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ReportOutputFormat,
    },

    /// List the languages the detector knows about
    Languages,
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("i18n_scout={}", default_level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Check {
            url,
            output,
            export,
            format,
        } => {
            let location = RepoLocation::parse(&url)?;
            println!("Downloading and analysing: {}", location.url);

            let engine = Engine::from_config(&config);
            match engine.check(&location) {
                CheckOutcome::Analyzed { report, fetch } => {
                    if let Some(winner) = fetch.winning_strategy() {
                        println!("{} via {}", "Repository downloaded".green(), winner.strategy);
                    }
                    print_report(&location.url, &report);

                    let path = match (output, export) {
                        (Some(path), _) => Some(path),
                        (None, true) => Some(PathBuf::from(export_file_name(&location, format))),
                        (None, false) => None,
                    };
                    if let Some(path) = path {
                        let document =
                            ExportDocument::new(&location.url, &report).with_acquisition(&fetch);
                        save_report(&document, format, path)?;
                    }
                }
                CheckOutcome::FetchFailed { fetch } => {
                    eprintln!("{}", "Failed to download repository.".red().bold());
                    for attempt in &fetch.attempts {
                        if let Some(err) = &attempt.error {
                            eprintln!("  - {}: {}", attempt.strategy, err.dimmed());
                        }
                    }
                    eprintln!("Check that the URL is correct and the repository is public.");
                    bail!("could not acquire {}", location.url);
                }
            }
        }

        Commands::Scan {
            directory,
            output,
            format,
        } => {
            if !directory.is_dir() {
                bail!("Not a directory: {}", directory.display());
            }
            let source = directory.display().to_string();
            println!("Analysing: {}", source);

            let engine = Engine::from_config(&config);
            let report = engine.scan(&directory);
            print_report(&source, &report);

            if let Some(path) = output {
                save_report(&ExportDocument::new(&source, &report), format, path)?;
            }
        }

        Commands::Languages => {
            println!("{}", "Supported language detection".bold());
            for key in LanguageKey::all() {
                println!("  {:<10} {:<3} {}", key.name(), key.code(), key.native_name());
            }
        }
    }

    Ok(())
}
