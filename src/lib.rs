// SPDX-License-Identifier: PMPL-1.0-or-later

//! i18n-scout: heuristic multilingual-support detection for repositories.
//!
//! Given the URL of a hosted repository, the engine fetches the tree,
//! finds the Streamlit sources in it, and decides whether the application
//! supports English and Indic languages.
//!
//! ENGINE PILLARS:
//! 1. **Fetch**: ordered acquisition strategies (git clone, then archive
//!    downloads) into a scoped temporary directory.
//! 2. **Detect**: independent detectors for i18n usage patterns, language
//!    content, translation artifacts and declared dependencies.
//! 3. **Score**: a fixed additive rule turns the detector signals into a
//!    bounded confidence score, a classification and recommendations.

pub mod config;
pub mod dependencies;
pub mod discovery;
pub mod engine;
pub mod fetch;
pub mod languages;
pub mod patterns;
pub mod report;
pub mod scoring;
pub mod translation;
pub mod types;
