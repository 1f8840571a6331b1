//! Path and tuning helpers.

use std::path::{Path, PathBuf};

use crate::utils::config::DEFAULT_WORKERS;

/// Returns true if the walk should hand `path` to the worker pool. The
/// pipeline's own artifacts (result files, run log, report) are excluded so a
/// scan rooted at the output directory never reads what it is writing.
pub fn should_scan(path: &Path, artifact_canonical: &[PathBuf]) -> bool {
    !artifact_canonical.iter().any(|a| a.as_path() == path)
}

/// Effective worker count: an explicit request is honored (floored to 1); the
/// default is capped at available parallelism.
pub fn effective_workers(requested: Option<usize>) -> usize {
    match requested {
        Some(n) => n.max(1),
        None => DEFAULT_WORKERS.min(rayon::current_num_threads()).max(1),
    }
}

/// Canonicalize the scan root. A root that cannot be canonicalized (e.g. it
/// does not exist) is passed through as-is; the walk reports the traversal
/// error and the run completes with empty results.
pub fn canonicalize_root(root: &Path) -> PathBuf {
    root.canonicalize().unwrap_or_else(|_| root.to_path_buf())
}
