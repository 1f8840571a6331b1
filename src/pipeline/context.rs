//! Pipeline context and channel plumbing shared by the walk, workers, and sinks.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::types::{Category, Finding};
use crate::utils::RunLog;
use crate::utils::config::FINDING_CHANNEL_CAP;

/// Shared context for the walk thread: root, artifact exclusions, link policy,
/// and the run log for skip records.
pub struct PipelineContext {
    pub root: PathBuf,
    /// Canonical paths of the pipeline's own artifacts, excluded from the walk.
    pub artifact_canonical: Vec<PathBuf>,
    pub follow_links: bool,
    pub run_log: Arc<RunLog>,
}

/// One finding sender per category, cloned into each worker. Dropping the last
/// clone closes both category channels, which is the sinks' termination signal.
#[derive(Clone)]
pub struct CategorySenders {
    secret_tx: Sender<String>,
    endpoint_tx: Sender<String>,
}

impl CategorySenders {
    /// Route a finding to its category channel. A send error means the sink is
    /// gone; the finding is dropped and the worker keeps draining the queue.
    pub fn send(&self, finding: Finding) {
        let tx = match finding.category {
            Category::Secret => &self.secret_tx,
            Category::Endpoint => &self.endpoint_tx,
        };
        let _ = tx.send(finding.value);
    }
}

/// Channels and shared state for one pipeline run. The walk thread gets
/// `path_tx` and `ctx`; every worker gets a `path_rx` and `finding_txs` clone;
/// each sink gets its category receiver.
pub struct PipelineChannels {
    pub path_tx: Sender<PathBuf>,
    pub path_rx: Receiver<PathBuf>,
    pub finding_txs: CategorySenders,
    pub finding_rxs: Vec<(Category, Receiver<String>)>,
    pub ctx: PipelineContext,
}

/// Handles for one running pipeline, joined in coordinator order: walk (queue
/// closed), workers (queue drained, finding channels closed), sinks (flushed).
pub struct PipelineHandles {
    pub walk_handle: JoinHandle<usize>,
    pub worker_handles: Vec<JoinHandle<()>>,
    pub sink_handles: Vec<(Category, JoinHandle<usize>)>,
}

pub fn create_pipeline_channels(
    root: &Path,
    artifact_canonical: Vec<PathBuf>,
    follow_links: bool,
    queue_cap: usize,
    run_log: &Arc<RunLog>,
) -> PipelineChannels {
    let (path_tx, path_rx) = bounded::<PathBuf>(queue_cap);
    let (secret_tx, secret_rx) = bounded::<String>(FINDING_CHANNEL_CAP);
    let (endpoint_tx, endpoint_rx) = bounded::<String>(FINDING_CHANNEL_CAP);

    let ctx = PipelineContext {
        root: root.to_path_buf(),
        artifact_canonical,
        follow_links,
        run_log: Arc::clone(run_log),
    };

    PipelineChannels {
        path_tx,
        path_rx,
        finding_txs: CategorySenders {
            secret_tx,
            endpoint_tx,
        },
        finding_rxs: vec![
            (Category::Secret, secret_rx),
            (Category::Endpoint, endpoint_rx),
        ],
        ctx,
    }
}
