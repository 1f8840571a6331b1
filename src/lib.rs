//! Droidhound: Android app forensic artifact extraction and concurrent
//! secret/endpoint scanning.

pub mod engine;
pub mod extract;
pub mod matcher;
pub mod pipeline;
pub mod scan;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use anyhow::Context;
use log::debug;
use std::path::Path;
use std::sync::Arc;

use crate::utils::RunLog;
use crate::utils::config::OutputLayout;

/// Result alias used by the public droidhound API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: scan the tree under `root` with `opts`, writing
/// `secrets.txt`, `endpoints.txt`, the run log, and the scan report under
/// `output_dir`.
///
/// Creates `output_dir` if needed; output-artifact creation failures are the
/// only fatal errors. Unreadable files and subtrees are skipped with a record
/// in the run log, and the result files are always produced (possibly empty).
pub fn scan_dir(root: &Path, output_dir: &Path, opts: &ScanOpts) -> Result<ScanReport> {
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let run_log = Arc::new(RunLog::create(
        &output_dir.join(OutputLayout::get().log_filename()),
    )?);
    let report = scan::scan_with_log(root, output_dir, opts, &run_log)?;
    run_log.flush();
    Ok(report)
}
