//! Post-run reporting for skipped units.

use crate::types::ScanReport;

/// Log a summary when units were skipped. Each unit already has its own record
/// in the run log; per-file errors never fail the run.
pub fn report_skipped_units(report: &ScanReport) {
    if !report.skipped.is_empty() {
        log::warn!(
            "Skipped {} units due to traversal or read errors",
            report.skipped.len()
        );
    }
}
