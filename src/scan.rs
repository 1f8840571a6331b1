//! Scan operation: run the pipeline over a populated tree and persist the
//! report artifact.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::sync::Arc;

use crate::pipeline::scan_tree;
use crate::types::{Category, ScanOpts, ScanReport};
use crate::utils::RunLog;
use crate::utils::config::OutputLayout;

/// Scan the tree under `root`, writing result artifacts under `output_dir`.
/// The caller owns the run log (one per run) so extraction records and scan
/// records land in the same artifact.
pub fn scan_with_log(
    root: &Path,
    output_dir: &Path,
    opts: &ScanOpts,
    run_log: &Arc<RunLog>,
) -> Result<ScanReport> {
    run_log.record(&format!("parsing extracted data under {}", root.display()));
    let report = scan_tree(root, output_dir, opts, run_log)?;
    for category in Category::ALL {
        run_log.record(&format!(
            "wrote {} unique {} to {}",
            report.count(category),
            category.label(),
            category.output_filename()
        ));
    }
    write_report(output_dir, &report);
    print_summary(&report);
    Ok(report)
}

/// Persist the machine-readable report. Failure is logged, not fatal; the
/// result files are the contract artifacts.
fn write_report(output_dir: &Path, report: &ScanReport) {
    let path = output_dir.join(OutputLayout::get().report_filename());
    let json = match serde_json::to_string_pretty(report) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("failed to serialize scan report: {}", err);
            return;
        }
    };
    if let Err(err) = std::fs::write(&path, json) {
        log::warn!("failed to write {}: {}", path.display(), err);
    }
}

/// Scan summary
fn print_summary(report: &ScanReport) {
    log::info!(
        "{} | {} | {}",
        format!("Files: {}", report.files_enumerated),
        format!("Secrets: {}", report.secrets).yellow(),
        format!("Endpoints: {}", report.endpoints).cyan()
    );
}
