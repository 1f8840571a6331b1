//! Per-category sinks: deduplicate finding values and stream them to the
//! result file in first-arrival order.

use anyhow::{Context, Result};
use crossbeam_channel::Receiver;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::types::Category;
use crate::utils::RunLog;

/// Create the result file for every category up front. Failure here is fatal:
/// the pipeline never starts scanning without its output artifacts.
pub fn create_result_files(output_dir: &Path) -> Result<Vec<(Category, File)>> {
    Category::ALL
        .iter()
        .map(|&category| {
            let path = output_dir.join(category.output_filename());
            let file = File::create(&path)
                .with_context(|| format!("create result file {}", path.display()))?;
            Ok((category, file))
        })
        .collect()
}

/// Single sink: consume values until the channel closes, write each first
/// occurrence immediately, drop duplicates silently, flush on close. The seen
/// set is owned by this thread alone. Returns the unique line count.
fn sink_loop(rx: Receiver<String>, file: File, category: Category, run_log: Arc<RunLog>) -> usize {
    let mut writer = BufWriter::new(file);
    let mut seen: HashSet<String> = HashSet::new();
    let mut written = 0_usize;
    while let Ok(value) = rx.recv() {
        if !seen.insert(value.clone()) {
            continue;
        }
        match writeln!(writer, "{}", value) {
            Ok(()) => written += 1,
            Err(err) => run_log.record(&format!(
                "write to {} failed: {}",
                category.output_filename(),
                err
            )),
        }
    }
    if let Err(err) = writer.flush() {
        run_log.record(&format!(
            "flush {} failed: {}",
            category.output_filename(),
            err
        ));
    }
    written
}

/// Spawn one sink per category. Each handle yields its unique line count.
pub fn spawn_category_sinks(
    files: Vec<(Category, File)>,
    finding_rxs: Vec<(Category, Receiver<String>)>,
    run_log: &Arc<RunLog>,
) -> Vec<(Category, JoinHandle<usize>)> {
    files
        .into_iter()
        .zip(finding_rxs)
        .map(|((category, file), (rx_category, rx))| {
            debug_assert_eq!(category, rx_category);
            let run_log = Arc::clone(run_log);
            (
                category,
                thread::spawn(move || sink_loop(rx, file, category, run_log)),
            )
        })
        .collect()
}
