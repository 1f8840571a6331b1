//! Per-run logging context. One pipeline run owns one [`RunLog`]; components
//! hold it by `Arc` instead of going through global logger state, so parallel
//! runs (and parallel tests) never share mutable logging state.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::types::SkippedUnit;

/// Run-scoped log: writes one line per event to the run log artifact, mirrors
/// to the console via the `log` facade, and tracks skipped units for the
/// report. Shared across the walk, worker, and sink threads.
pub struct RunLog {
    writer: Mutex<BufWriter<File>>,
    skipped: Mutex<Vec<SkippedUnit>>,
}

impl RunLog {
    /// Create the run log artifact at `path`, truncating any previous run's log.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("create run log at {}", path.display()))?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            skipped: Mutex::new(Vec::new()),
        })
    }

    /// Record a lifecycle event. Mirrored to the console at Debug.
    pub fn record(&self, line: &str) {
        log::debug!("{}", line);
        self.write_line(line);
    }

    /// Record a skipped unit of work. Mirrored to the console at Warn and
    /// tracked for the scan report.
    pub fn skip(&self, path: &Path, reason: &str) {
        log::warn!("skipping {}: {}", path.display(), reason);
        self.write_line(&format!("skipped {}: {}", path.display(), reason));
        self.skipped.lock().unwrap().push(SkippedUnit {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        });
    }

    /// Units skipped so far. Snapshot; the log keeps its own copy.
    pub fn skipped(&self) -> Vec<SkippedUnit> {
        self.skipped.lock().unwrap().clone()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.lock().unwrap().len()
    }

    pub fn flush(&self) {
        let _ = self.writer.lock().unwrap().flush();
    }

    fn write_line(&self, line: &str) {
        // A failed log write must never take down the run; the console mirror
        // already carried the message.
        let _ = writeln!(self.writer.lock().unwrap(), "{}", line);
    }
}

impl Drop for RunLog {
    fn drop(&mut self) {
        if let Ok(mut w) = self.writer.lock() {
            let _ = w.flush();
        }
    }
}
