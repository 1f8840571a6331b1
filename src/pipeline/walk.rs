//! Walk loop: enumerate regular files under the root and feed the dispatch queue.

use crossbeam_channel::Sender;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use walkdir::WalkDir;

use crate::engine::tools::should_scan;

use super::context::PipelineContext;

/// One result from the directory walk: a file task, or a traversal error with
/// the offending path when known.
pub enum WalkOutcome {
    File(PathBuf),
    Err { msg: String, path: Option<PathBuf> },
}

/// Convert a walkdir result into [`WalkOutcome`]. Directories and other
/// non-file entries yield None; they are never dispatched as tasks.
pub fn to_outcome(r: Result<walkdir::DirEntry, walkdir::Error>) -> Option<WalkOutcome> {
    match r {
        Ok(entry) => entry
            .file_type()
            .is_file()
            .then(|| WalkOutcome::File(entry.into_path())),
        Err(err) => Some(WalkOutcome::Err {
            msg: format!("{}", err),
            path: err.path().map(PathBuf::from),
        }),
    }
}

/// Spawn the enumerator thread: a serial walkdir traversal, deterministic for
/// an unchanging tree. Returns a handle yielding the dispatched task count.
pub fn spawn_walk_thread(path_tx: Sender<PathBuf>, ctx: PipelineContext) -> JoinHandle<usize> {
    thread::spawn(move || {
        let iter = WalkDir::new(&ctx.root)
            .follow_links(ctx.follow_links)
            .into_iter()
            .filter_map(to_outcome);
        run_walk_loop(path_tx, &ctx, iter)
    })
}

/// Consume walk outcomes: dispatch included files, record traversal errors as
/// skipped units (the walk continues with siblings). Drops `path_tx` on
/// return, which closes the dispatch queue. Returns the dispatched task count.
pub fn run_walk_loop<I>(path_tx: Sender<PathBuf>, ctx: &PipelineContext, iter: I) -> usize
where
    I: Iterator<Item = WalkOutcome>,
{
    let mut count = 0_usize;
    for outcome in iter {
        match outcome {
            WalkOutcome::File(path) => {
                if should_scan(&path, &ctx.artifact_canonical) {
                    if path_tx.send(path).is_err() {
                        break;
                    }
                    count += 1;
                }
            }
            WalkOutcome::Err { msg, path } => {
                // Errors with no path (e.g. a root that does not exist) are
                // recorded against the root itself.
                let path = path.unwrap_or_else(|| ctx.root.clone());
                ctx.run_log.skip(&path, &msg);
            }
        }
    }
    drop(path_tx);
    count
}
