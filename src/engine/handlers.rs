//! CLI command handler: extract app and device artifacts, then scan the tree.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::extract::{self, TrafficCapture};
use crate::scan;
use crate::types::{Opts, ScanOpts};
use crate::utils::config::OutputLayout;
use crate::utils::droidhound_toml::load_droidhound_toml;
use crate::utils::{RunLog, setup_logging};

use super::arg_parser::Cli;

/// Merge CLI flags over `.droidhound.toml` defaults into run options. A flag
/// that was actually passed wins over the file; the file wins over built-ins.
fn resolve_opts(cli: &Cli) -> Opts {
    let file = load_droidhound_toml(Path::new("."));
    let file_threads = file.as_ref().and_then(|f| f.threads());
    let file_mobsf = file.as_ref().and_then(|f| f.mobsf());
    let file_traffic = file.as_ref().and_then(|f| f.traffic());
    let file_verbose = file.as_ref().and_then(|f| f.verbose());

    Opts {
        apk_path: cli.apk.clone(),
        package: cli.package.clone(),
        output_dir: cli.output_dir(),
        device_dir: cli.device_dir(),
        mobsf: cli.mobsf.or(file_mobsf).unwrap_or(true),
        traffic: cli.traffic.or(file_traffic).unwrap_or(false),
        verbose: cli.verbose.or(file_verbose).unwrap_or(false),
        workers: cli.threads.or(file_threads),
        scan_only: cli.scan_only,
    }
}

/// Run the full analysis: extraction (unless `--scan-only`), then the scan
/// pipeline over the output tree. Extraction failures are logged and the scan
/// proceeds over whatever landed in the tree.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = resolve_opts(cli);
    setup_logging(opts.verbose);

    fs::create_dir_all(&opts.output_dir).with_context(|| {
        format!("create output directory {}", opts.output_dir.display())
    })?;
    let run_log = Arc::new(RunLog::create(
        &opts.output_dir.join(OutputLayout::get().log_filename()),
    )?);
    run_log.record("starting analysis");

    let mut capture = None;
    if opts.scan_only {
        run_log.record("extraction skipped (--scan-only)");
    } else {
        extract::run_jadx(&opts.apk_path, &opts.output_dir, &run_log);
        if opts.mobsf {
            extract::run_mobsf(&opts.apk_path, &opts.output_dir, &run_log);
        }
        if opts.traffic {
            match TrafficCapture::start(&opts.output_dir, &run_log) {
                Ok(c) => capture = Some(c),
                Err(err) => run_log.record(&format!("mitmproxy failed: {}", err)),
            }
        }
        extract::pull_app_data(&opts.device_dir, &opts.output_dir, &run_log);
    }

    let scan_opts = ScanOpts {
        workers: opts.workers,
        ..Default::default()
    };
    scan::scan_with_log(&opts.output_dir, &opts.output_dir, &scan_opts, &run_log)?;

    if let Some(capture) = capture {
        capture.stop(&run_log);
    }
    run_log.record("analysis completed");
    run_log.flush();
    log::info!("Analysis completed. Results in {}", opts.output_dir.display());
    Ok(())
}
