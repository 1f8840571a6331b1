//! Application configuration constants.
//! Tuning and thresholds in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived artifact names: built once from `CARGO_PKG_NAME`, then cached.
/// The category result filenames (`secrets.txt`, `endpoints.txt`) are part of the
/// output contract and live on [`Category`](crate::types::Category) instead.
pub struct OutputLayout {
    pkg_name: &'static str,
    log_filename: String,
    report_filename: String,
}

static OUTPUT_LAYOUT: OnceLock<OutputLayout> = OnceLock::new();

impl OutputLayout {
    pub fn get() -> &'static OutputLayout {
        OUTPUT_LAYOUT.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            OutputLayout {
                pkg_name: pkg,
                log_filename: format!("{pkg}.log"),
                report_filename: "scan_report.json".to_string(),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// Run log filename (e.g. `droidhound.log`), relative to the output directory.
    pub fn log_filename(&self) -> &str {
        &self.log_filename
    }

    /// Scan report filename, relative to the output directory.
    pub fn report_filename(&self) -> &str {
        &self.report_filename
    }
}

// ---- Worker pool ----

/// Default scan worker count when not configured.
pub const DEFAULT_WORKERS: usize = 5;

/// Dispatch queue slots per worker: queue capacity is `workers * this` unless
/// overridden, so the walk stays a little ahead without buffering the tree.
pub const DISPATCH_SLOTS_PER_WORKER: usize = 2;

/// Capacity of each per-category finding channel. Sinks drain continuously, so
/// this only needs to absorb short bursts from the worker pool.
pub const FINDING_CHANNEL_CAP: usize = 100;

// ---- File reads ----

/// Read thresholds for the scan workers.
pub struct ReadConsts;

impl ReadConsts {
    /// File size above which content is memory-mapped instead of read into a
    /// buffer (bytes). 100 MB.
    pub const MMAP_THRESHOLD: u64 = 100 * 1024 * 1024;
}
