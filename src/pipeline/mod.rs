//! Pipeline components: context and channels, walk loop, scan workers,
//! category sinks, and the coordinator.

pub mod context;
pub mod error_handler;
pub mod orchestrator;
pub mod sink;
pub mod walk;
pub mod workers;

pub use context::{
    CategorySenders, PipelineChannels, PipelineContext, PipelineHandles, create_pipeline_channels,
};
pub use error_handler::report_skipped_units;
pub use orchestrator::{run_pipeline, scan_tree};
pub use sink::{create_result_files, spawn_category_sinks};
pub use walk::{WalkOutcome, run_walk_loop, spawn_walk_thread, to_outcome};
pub use workers::spawn_scan_workers;
