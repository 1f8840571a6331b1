//! JADX decompilation of the APK into `<output>/decompiled`.

use std::path::Path;
use std::process::Command;

use crate::utils::RunLog;

pub fn run_jadx(apk: &Path, output_dir: &Path, run_log: &RunLog) {
    run_log.record("decompiling APK with JADX");
    let dest = output_dir.join("decompiled");
    match Command::new("jadx").arg("-d").arg(&dest).arg(apk).status() {
        Ok(status) if status.success() => run_log.record("decompilation completed"),
        Ok(status) => run_log.record(&format!("JADX decompilation failed: {}", status)),
        Err(err) => run_log.record(&format!("JADX decompilation failed: {}", err)),
    }
}
