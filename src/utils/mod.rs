pub mod config;
pub(crate) mod droidhound_toml;
pub mod logger;
pub mod run_log;

pub use config::*;
pub use logger::setup_logging;
pub use run_log::RunLog;
