//! Pipeline coordinator: wires the enumerator, worker pool, and sinks, and
//! owns the completion barrier at each stage transition.

use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::engine::tools::{canonicalize_root, effective_workers};
use crate::matcher::PatternSet;
use crate::types::{Category, ScanOpts, ScanReport};
use crate::utils::RunLog;
use crate::utils::config::{DISPATCH_SLOTS_PER_WORKER, OutputLayout};

use super::context::{PipelineChannels, PipelineHandles, create_pipeline_channels};
use super::error_handler::report_skipped_units;
use super::sink::{create_result_files, spawn_category_sinks};
use super::walk::spawn_walk_thread;
use super::workers::spawn_scan_workers;

/// Canonical paths of the pipeline's own artifacts under `output_dir`. These
/// are excluded from the walk so a scan rooted at the output directory never
/// reads what it is writing.
fn artifact_paths(output_dir: &Path) -> Vec<PathBuf> {
    let out = output_dir
        .canonicalize()
        .unwrap_or_else(|_| output_dir.to_path_buf());
    let layout = OutputLayout::get();
    let mut paths: Vec<PathBuf> = Category::ALL
        .iter()
        .map(|c| out.join(c.output_filename()))
        .collect();
    paths.push(out.join(layout.log_filename()));
    paths.push(out.join(layout.report_filename()));
    paths
}

/// Start the full pipeline: compile patterns, create the result files (fatal
/// on failure), then spawn sinks, workers, and the walk thread. The caller
/// owns the returned handles and must join them in order.
pub fn run_pipeline(
    root: &Path,
    output_dir: &Path,
    opts: &ScanOpts,
    run_log: &Arc<RunLog>,
) -> Result<PipelineHandles> {
    let workers = effective_workers(opts.workers);
    let queue_cap = opts
        .queue_cap
        .unwrap_or(workers * DISPATCH_SLOTS_PER_WORKER)
        .max(1);
    debug!("scanning with {} workers, queue cap {}", workers, queue_cap);

    let patterns = Arc::new(PatternSet::new()?);
    let files = create_result_files(output_dir)?;

    let PipelineChannels {
        path_tx,
        path_rx,
        finding_txs,
        finding_rxs,
        ctx,
    } = create_pipeline_channels(
        root,
        artifact_paths(output_dir),
        opts.follow_links,
        queue_cap,
        run_log,
    );

    let sink_handles = spawn_category_sinks(files, finding_rxs, run_log);
    let worker_handles = spawn_scan_workers(&path_rx, &finding_txs, &patterns, run_log, workers);
    // Workers now hold the only finding senders; dropping ours lets the
    // channels close when the last worker exits.
    drop(finding_txs);
    let walk_handle = spawn_walk_thread(path_tx, ctx);

    Ok(PipelineHandles {
        walk_handle,
        worker_handles,
        sink_handles,
    })
}

/// Run the pipeline to completion: Idle → Enumerating+Working → Draining →
/// Closing → Done, with a join barrier at each transition. Per-file and
/// per-subtree errors never abort the run; the only fatal conditions are
/// result-file creation failures inside [`run_pipeline`].
pub fn scan_tree(
    root: &Path,
    output_dir: &Path,
    opts: &ScanOpts,
    run_log: &Arc<RunLog>,
) -> Result<ScanReport> {
    let root = canonicalize_root(root);
    let PipelineHandles {
        walk_handle,
        worker_handles,
        sink_handles,
    } = run_pipeline(&root, output_dir, opts, run_log)?;

    // Enumerating+Working → Draining: the walk finished and closed the queue.
    let files_enumerated = walk_handle
        .join()
        .map_err(|_| anyhow::anyhow!("walk thread panicked"))?;
    debug!("walk done, {} file tasks dispatched", files_enumerated);

    // Draining → Closing: every worker drained the queue and dropped its
    // finding senders, closing the category channels.
    for h in worker_handles {
        let _ = h.join();
    }

    // Closing → Done: sinks flushed their result files.
    let mut report = ScanReport {
        files_enumerated,
        ..Default::default()
    };
    for (category, handle) in sink_handles {
        let written = handle
            .join()
            .map_err(|_| anyhow::anyhow!("{} sink thread panicked", category.label()))?;
        report.set_count(category, written);
    }

    report.skipped = run_log.skipped();
    report_skipped_units(&report);
    Ok(report)
}
