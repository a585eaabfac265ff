// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report assembly and output

pub mod assembler;
pub mod formatter;
pub mod output;

use crate::types::*;
use anyhow::Result;
use std::path::Path;

pub use assembler::ReportAssembler;
pub use formatter::ReportFormatter;
pub use output::{export_file_name, ExportDocument, ReportOutputFormat};

/// Save an export document to file in the requested format
pub fn save_report<P: AsRef<Path>>(
    document: &ExportDocument,
    format: ReportOutputFormat,
    path: P,
) -> Result<()> {
    ReportFormatter::new().save(document, format, path)
}

/// Print report to console
pub fn print_report(source: &str, report: &AnalysisReport) {
    ReportFormatter::new().print(source, report);
}
