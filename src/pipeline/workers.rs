//! Scan workers: read file bytes, run the pattern set, route findings by category.

use anyhow::Result;
use crossbeam_channel::Receiver;
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::matcher::PatternSet;
use crate::utils::RunLog;
use crate::utils::config::ReadConsts;

use super::context::CategorySenders;

/// File content handed to the matcher: buffered for ordinary files,
/// memory-mapped above the threshold.
enum FileBytes {
    Buffered(Vec<u8>),
    Mapped(Mmap),
}

impl AsRef<[u8]> for FileBytes {
    fn as_ref(&self) -> &[u8] {
        match self {
            FileBytes::Buffered(v) => v,
            FileBytes::Mapped(m) => m,
        }
    }
}

fn read_file_bytes(path: &Path) -> Result<FileBytes> {
    let meta = std::fs::metadata(path)?;
    if meta.len() > ReadConsts::MMAP_THRESHOLD {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(FileBytes::Mapped(mmap))
    } else {
        Ok(FileBytes::Buffered(std::fs::read(path)?))
    }
}

/// Single scan worker: pull tasks until the dispatch queue closes and drains.
/// Each task is consumed by exactly one worker; a read failure is recorded as
/// a skipped unit and the worker moves on.
fn scan_worker_loop(
    path_rx: Receiver<PathBuf>,
    senders: CategorySenders,
    patterns: Arc<PatternSet>,
    run_log: Arc<RunLog>,
) {
    while let Ok(path) = path_rx.recv() {
        let content = match read_file_bytes(&path) {
            Ok(content) => content,
            Err(err) => {
                run_log.skip(&path, &err.to_string());
                continue;
            }
        };
        for finding in patterns.scan(content.as_ref()) {
            senders.send(finding);
        }
    }
    drop(senders);
}

/// Spawn the worker pool. The caller must drop its own `CategorySenders` after
/// this so the finding channels close once the last worker exits.
pub fn spawn_scan_workers(
    path_rx: &Receiver<PathBuf>,
    senders: &CategorySenders,
    patterns: &Arc<PatternSet>,
    run_log: &Arc<RunLog>,
    workers: usize,
) -> Vec<JoinHandle<()>> {
    (0..workers)
        .map(|_| {
            let path_rx = path_rx.clone();
            let senders = senders.clone();
            let patterns = Arc::clone(patterns);
            let run_log = Arc::clone(run_log);
            thread::spawn(move || scan_worker_loop(path_rx, senders, patterns, run_log))
        })
        .collect()
}
