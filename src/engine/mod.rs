//! Engine module: CLI surface and shared helpers.

pub mod arg_parser;
pub mod handlers;
pub mod tools;

pub use arg_parser::Cli;
pub use handlers::handle_run;
pub use tools::{canonicalize_root, effective_workers, should_scan};
