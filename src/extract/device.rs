//! Device data extraction over adb: stage app data to /sdcard with root, pull
//! each directory into the output tree, then remove the staging copies.

use std::path::Path;
use std::process::Command;

use crate::utils::RunLog;

/// App data directories pulled from the device.
const APP_DATA_DIRS: [&str; 3] = ["databases", "shared_prefs", "files"];

pub fn pull_app_data(device_dir: &str, output_dir: &Path, run_log: &RunLog) {
    run_log.record("extracting device data with ADB");

    let stage = format!(
        "su -c 'cp -r {d}/databases {d}/shared_prefs {d}/files /sdcard/'",
        d = device_dir
    );
    run_adb(&["shell", &stage], run_log);

    for dir in APP_DATA_DIRS {
        let src = format!("/sdcard/{dir}");
        let dest = output_dir.join(dir).display().to_string();
        run_adb(&["pull", &src, &dest], run_log);
    }

    run_adb(
        &[
            "shell",
            "rm",
            "-r",
            "/sdcard/databases",
            "/sdcard/shared_prefs",
            "/sdcard/files",
        ],
        run_log,
    );
}

fn run_adb(args: &[&str], run_log: &RunLog) {
    match Command::new("adb").args(args).output() {
        Ok(out) if out.status.success() => {
            run_log.record(&format!("adb {} succeeded", args.join(" ")));
        }
        Ok(out) => run_log.record(&format!(
            "adb {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&out.stderr).trim()
        )),
        Err(err) => run_log.record(&format!("adb {} failed: {}", args.join(" "), err)),
    }
}
