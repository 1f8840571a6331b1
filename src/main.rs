//! Droidhound CLI: extract Android app artifacts and scan them for secrets
//! and endpoints.

use anyhow::Result;
use clap::Parser;
use droidhound::engine::arg_parser::Cli;
use droidhound::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
