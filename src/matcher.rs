//! Secret and endpoint pattern matching over raw file bytes.
//!
//! Matching is byte-level (`regex::bytes`), so arbitrary binary content never
//! aborts a scan: byte runs that are not valid UTF-8 simply fail to match, and
//! matched spans are converted with `String::from_utf8_lossy` on the way out.

use anyhow::{Context, Result};
use regex::bytes::Regex;

use crate::types::{Category, Finding};

/// `<label> [:=] optional-quote value optional-quote`, label case-insensitive.
/// The value capture runs to the next whitespace or double quote; it may
/// truncate multi-word secrets or keep a trailing single quote. That literal
/// behavior is part of the output contract.
const SECRET_PATTERN: &str = r#"(?i-u)(api_key|token|secret)\s*[:=]\s*["']?([^"\s]+)["']?"#;

/// `http(s)://` followed by a run of non-whitespace, non-double-quote bytes.
const ENDPOINT_PATTERN: &str = r#"(?-u)https?://[^\s"]+"#;

/// Compiled matcher rules, one per category. Stateless; a single instance is
/// shared read-only across all scan workers.
pub struct PatternSet {
    secret: Regex,
    endpoint: Regex,
}

impl PatternSet {
    pub fn new() -> Result<Self> {
        Ok(Self {
            secret: Regex::new(SECRET_PATTERN).context("compile secret pattern")?,
            endpoint: Regex::new(ENDPOINT_PATTERN).context("compile endpoint pattern")?,
        })
    }

    /// Extract all findings from `content`. Pure and deterministic: identical
    /// input always yields the identical finding sequence.
    pub fn scan(&self, content: &[u8]) -> Vec<Finding> {
        let mut findings = Vec::new();

        for caps in self.secret.captures_iter(content) {
            let label = String::from_utf8_lossy(&caps[1]);
            let value = String::from_utf8_lossy(&caps[2]);
            findings.push(Finding {
                category: Category::Secret,
                value: format!("{label}: {value}"),
            });
        }

        for m in self.endpoint.find_iter(content) {
            findings.push(Finding {
                category: Category::Endpoint,
                value: String::from_utf8_lossy(m.as_bytes()).into_owned(),
            });
        }

        findings
    }
}
