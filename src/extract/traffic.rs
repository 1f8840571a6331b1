//! Supervised mitmproxy capture to `<output>/traffic.mitm`: an explicit
//! start/stop pair with a held child handle, not a detached background task.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::Duration;

use crate::utils::RunLog;

/// Time given to mitmproxy to bind its port before extraction begins.
const STARTUP_GRACE: Duration = Duration::from_secs(2);

/// A running traffic capture. Dropping without [`stop`](Self::stop) kills the
/// child so no proxy outlives the run.
pub struct TrafficCapture {
    child: Child,
}

impl TrafficCapture {
    pub fn start(output_dir: &Path, run_log: &RunLog) -> Result<Self> {
        run_log.record("starting traffic capture with mitmproxy");
        let child = Command::new("mitmproxy")
            .arg("-w")
            .arg(output_dir.join("traffic.mitm"))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("spawn mitmproxy")?;
        thread::sleep(STARTUP_GRACE);
        Ok(Self { child })
    }

    /// Stop the capture and reap the child.
    pub fn stop(mut self, run_log: &RunLog) {
        match self.child.kill() {
            Ok(()) => run_log.record("traffic capture stopped"),
            Err(err) => run_log.record(&format!("failed to stop mitmproxy: {}", err)),
        }
        let _ = self.child.wait();
    }
}

impl Drop for TrafficCapture {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
