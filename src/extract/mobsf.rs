//! MobSF static analysis in a docker container, report captured to
//! `<output>/mobsf_report.txt`.

use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::utils::RunLog;

const MOBSF_IMAGE: &str = "opensecurity/mobile-security-framework-mobsf";

pub fn run_mobsf(apk: &Path, output_dir: &Path, run_log: &RunLog) {
    run_log.record("running MobSF analysis");
    let report_path = output_dir.join("mobsf_report.txt");
    let report = match File::create(&report_path) {
        Ok(file) => file,
        Err(err) => {
            run_log.record(&format!(
                "failed to create MobSF report file {}: {}",
                report_path.display(),
                err
            ));
            return;
        }
    };
    let report_err = match report.try_clone() {
        Ok(file) => file,
        Err(err) => {
            run_log.record(&format!("failed to clone MobSF report handle: {}", err));
            return;
        }
    };

    let volume = format!("{}:/home/mobsf/apk.apk", apk.display());
    let status = Command::new("docker")
        .args(["run", "-i", "--rm", "-v"])
        .arg(&volume)
        .arg(MOBSF_IMAGE)
        .args(["mobsfscan", "/home/mobsf/apk.apk"])
        .stdout(Stdio::from(report))
        .stderr(Stdio::from(report_err))
        .status();
    match status {
        Ok(status) if status.success() => run_log.record("MobSF analysis completed"),
        Ok(status) => run_log.record(&format!("MobSF failed: {}", status)),
        Err(err) => run_log.record(&format!("MobSF failed: {}", err)),
    }
}
