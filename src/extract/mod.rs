//! Extraction collaborators: decompiler, container scanner, traffic capture,
//! and device pull. Pure process orchestration; every failure is logged to the
//! run log and never aborts the run. The scan pipeline only needs the output
//! tree these populate.

pub mod decompile;
pub mod device;
pub mod mobsf;
pub mod traffic;

pub use decompile::run_jadx;
pub use device::pull_app_data;
pub use mobsf::run_mobsf;
pub use traffic::TrafficCapture;
