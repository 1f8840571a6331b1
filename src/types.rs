//! Public and internal types for the droidhound API and pipeline.

use serde::Serialize;
use std::path::PathBuf;

/// Finding category. Each category has its own matcher rule, its own channel,
/// and its own output artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Secret,
    Endpoint,
}

impl Category {
    /// The findable categories, in output order.
    pub const ALL: [Category; 2] = [Category::Secret, Category::Endpoint];

    /// Name of the result file for this category, relative to the output directory.
    pub fn output_filename(self) -> &'static str {
        match self {
            Category::Secret => "secrets.txt",
            Category::Endpoint => "endpoints.txt",
        }
    }

    /// Short human name used in logs and the report.
    pub fn label(self) -> &'static str {
        match self {
            Category::Secret => "secrets",
            Category::Endpoint => "endpoints",
        }
    }
}

/// A single categorized match extracted from file content. Immutable; has no
/// identity beyond its value within a category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub category: Category,
    /// Secret: `"<label-as-matched>: <value>"` (label casing preserved).
    /// Endpoint: the raw URL-like string.
    pub value: String,
}

/// Options for [`scan_dir`](crate::scan_dir). Immutable for the run.
#[derive(Clone, Debug, Default)]
pub struct ScanOpts {
    /// Worker thread count. When None, derived from the default and available
    /// parallelism; always at least 1.
    pub workers: Option<usize>,
    /// Dispatch queue capacity. When None, `workers * DISPATCH_SLOTS_PER_WORKER`.
    pub queue_cap: Option<usize>,
    /// Follow symbolic links during the walk.
    pub follow_links: bool,
}

/// Full options for a CLI run (extraction + scan). Built from the CLI and the
/// optional `.droidhound.toml` config file.
#[derive(Clone, Debug)]
pub struct Opts {
    pub apk_path: PathBuf,
    pub package: String,
    pub output_dir: PathBuf,
    pub device_dir: String,
    pub mobsf: bool,
    pub traffic: bool,
    pub verbose: bool,
    pub workers: Option<usize>,
    pub scan_only: bool,
}

/// One unit of work skipped during a run, with the reason it was skipped.
#[derive(Clone, Debug, Serialize)]
pub struct SkippedUnit {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of one scan run. Serialized to `scan_report.json` in the output
/// directory.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ScanReport {
    /// Files the walk handed to the worker pool.
    pub files_enumerated: usize,
    /// Unique secret values written to `secrets.txt`.
    pub secrets: usize,
    /// Unique endpoint values written to `endpoints.txt`.
    pub endpoints: usize,
    /// Units skipped due to traversal or read errors.
    pub skipped: Vec<SkippedUnit>,
}

impl ScanReport {
    /// Unique findings written for `category`.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Secret => self.secrets,
            Category::Endpoint => self.endpoints,
        }
    }

    pub fn set_count(&mut self, category: Category, n: usize) {
        match category {
            Category::Secret => self.secrets = n,
            Category::Endpoint => self.endpoints = n,
        }
    }
}
