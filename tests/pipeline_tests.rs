use droidhound::engine::{effective_workers, should_scan};
use droidhound::pipeline::context::PipelineContext;
use droidhound::pipeline::walk::{WalkOutcome, run_walk_loop};
use droidhound::scan_dir;
use droidhound::types::ScanOpts;
use droidhound::utils::RunLog;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|s| s.to_string())
        .collect()
}

fn opts_with_workers(n: usize) -> ScanOpts {
    ScanOpts {
        workers: Some(n),
        ..Default::default()
    }
}

// --- concrete end-to-end scenarios ---

#[test]
fn test_concrete_scenario_one_secret_one_endpoint() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_file(root.path(), "a.txt", "API_KEY=\"abcd1234\"");
    write_file(
        root.path(),
        "b.txt",
        "visit https://example.com/x and https://example.com/x again",
    );

    let report = scan_dir(root.path(), out.path(), &opts_with_workers(1)).unwrap();

    assert_eq!(report.files_enumerated, 2);
    assert_eq!(
        read_lines(&out.path().join("secrets.txt")),
        vec!["API_KEY: abcd1234"]
    );
    assert_eq!(
        read_lines(&out.path().join("endpoints.txt")),
        vec!["https://example.com/x"]
    );
}

#[test]
fn test_empty_tree_produces_empty_outputs() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let report = scan_dir(root.path(), out.path(), &opts_with_workers(2)).unwrap();

    assert_eq!(report.files_enumerated, 0);
    assert_eq!(report.secrets, 0);
    assert_eq!(report.endpoints, 0);
    let secrets = out.path().join("secrets.txt");
    let endpoints = out.path().join("endpoints.txt");
    assert!(secrets.exists());
    assert!(endpoints.exists());
    assert!(fs::read_to_string(&secrets).unwrap().is_empty());
    assert!(fs::read_to_string(&endpoints).unwrap().is_empty());
}

#[test]
fn test_missing_root_is_not_fatal() {
    let tmp = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let missing = tmp.path().join("does_not_exist");

    let report = scan_dir(&missing, out.path(), &opts_with_workers(2)).unwrap();

    assert_eq!(report.files_enumerated, 0);
    assert_eq!(report.skipped.len(), 1);
    assert!(fs::read_to_string(out.path().join("secrets.txt")).unwrap().is_empty());
    assert!(fs::read_to_string(out.path().join("endpoints.txt")).unwrap().is_empty());
}

// --- deduplication ---

#[test]
fn test_duplicate_values_across_files_written_once() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    for i in 0..5 {
        write_file(root.path(), &format!("f{i}.txt"), "token=shared-value");
    }

    let report = scan_dir(root.path(), out.path(), &opts_with_workers(3)).unwrap();

    assert_eq!(report.files_enumerated, 5);
    assert_eq!(
        read_lines(&out.path().join("secrets.txt")),
        vec!["token: shared-value"]
    );
}

#[test]
fn test_finding_set_stable_across_worker_counts() {
    let root = TempDir::new().unwrap();
    for i in 0..30 {
        write_file(
            root.path(),
            &format!("f{i}.txt"),
            &format!("api_key=unique-{i}\nsee https://example.com/shared and https://example.com/{i}\n"),
        );
    }

    let mut line_sets = Vec::new();
    for workers in [1, 4] {
        let out = TempDir::new().unwrap();
        scan_dir(root.path(), out.path(), &opts_with_workers(workers)).unwrap();
        let mut secrets = read_lines(&out.path().join("secrets.txt"));
        let mut endpoints = read_lines(&out.path().join("endpoints.txt"));
        secrets.sort();
        endpoints.sort();
        line_sets.push((secrets, endpoints));
    }

    assert_eq!(line_sets[0], line_sets[1]);
    assert_eq!(line_sets[0].0.len(), 30);
    assert_eq!(line_sets[0].1.len(), 31);
}

#[test]
fn test_first_appearance_order_with_single_worker() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_file(root.path(), "only.txt", "SECRET=a\nTOKEN=b\napi_key=c\n");

    scan_dir(root.path(), out.path(), &opts_with_workers(1)).unwrap();

    assert_eq!(
        read_lines(&out.path().join("secrets.txt")),
        vec!["SECRET: a", "TOKEN: b", "api_key: c"]
    );
}

// --- backpressure ---

#[test]
fn test_small_queue_many_files_completes() {
    let root = TempDir::new().unwrap();
    for i in 0..50 {
        write_file(root.path(), &format!("f{i}.txt"), &format!("secret=v{i}\n"));
    }

    for workers in [1, 3] {
        let out = TempDir::new().unwrap();
        let opts = ScanOpts {
            workers: Some(workers),
            queue_cap: Some(2),
            ..Default::default()
        };
        let report = scan_dir(root.path(), out.path(), &opts).unwrap();
        assert_eq!(report.files_enumerated, 50);
        assert_eq!(read_lines(&out.path().join("secrets.txt")).len(), 50);
    }
}

// --- error isolation ---

#[cfg(unix)]
#[test]
fn test_broken_symlink_skipped_siblings_scanned() {
    use std::os::unix::fs::symlink;

    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_file(root.path(), "a.txt", "api_key=aaa");
    write_file(root.path(), "b.txt", "api_key=bbb");
    write_file(root.path(), "c.txt", "api_key=ccc");
    symlink(root.path().join("gone.txt"), root.path().join("broken.txt")).unwrap();

    let opts = ScanOpts {
        workers: Some(2),
        follow_links: true,
        ..Default::default()
    };
    let report = scan_dir(root.path(), out.path(), &opts).unwrap();

    assert_eq!(report.skipped.len(), 1);
    let mut secrets = read_lines(&out.path().join("secrets.txt"));
    secrets.sort();
    assert_eq!(secrets, vec!["api_key: aaa", "api_key: bbb", "api_key: ccc"]);

    // Every skipped unit leaves a record in the run log.
    let log = fs::read_to_string(out.path().join("droidhound.log")).unwrap();
    assert!(log.contains("skipped"));
}

// --- own artifacts ---

#[test]
fn test_rescan_of_output_dir_skips_own_artifacts() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "source.txt", "go to https://example.com/page");

    let first = scan_dir(dir.path(), dir.path(), &opts_with_workers(1)).unwrap();
    assert_eq!(first.files_enumerated, 1);

    // Second run over the same tree: last run's result files, run log, and
    // report are excluded from the walk.
    let second = scan_dir(dir.path(), dir.path(), &opts_with_workers(1)).unwrap();
    assert_eq!(second.files_enumerated, 1);
    assert_eq!(
        read_lines(&dir.path().join("endpoints.txt")),
        vec!["https://example.com/page"]
    );
}

#[test]
fn test_scan_report_is_written() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_file(root.path(), "a.txt", "token=t1 https://example.com/r");

    scan_dir(root.path(), out.path(), &opts_with_workers(1)).unwrap();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("scan_report.json")).unwrap())
            .unwrap();
    assert_eq!(report["files_enumerated"], 1);
    assert_eq!(report["secrets"], 1);
    assert_eq!(report["endpoints"], 1);
}

// --- walk loop unit coverage ---

fn test_context(dir: &Path, artifacts: Vec<PathBuf>) -> (PipelineContext, Arc<RunLog>) {
    let run_log = Arc::new(RunLog::create(&dir.join("test.log")).unwrap());
    let ctx = PipelineContext {
        root: dir.to_path_buf(),
        artifact_canonical: artifacts,
        follow_links: false,
        run_log: Arc::clone(&run_log),
    };
    (ctx, run_log)
}

#[test]
fn test_walk_loop_records_error_and_continues_with_siblings() {
    let tmp = TempDir::new().unwrap();
    let (ctx, run_log) = test_context(tmp.path(), vec![]);
    let a = tmp.path().join("a.txt");
    let b = tmp.path().join("b.txt");
    let outcomes = vec![
        WalkOutcome::File(a.clone()),
        WalkOutcome::Err {
            msg: "permission denied".to_string(),
            path: Some(tmp.path().join("locked")),
        },
        WalkOutcome::File(b.clone()),
    ];

    let (tx, rx) = crossbeam_channel::unbounded();
    let count = run_walk_loop(tx, &ctx, outcomes.into_iter());

    assert_eq!(count, 2);
    assert_eq!(run_log.skipped_count(), 1);
    assert_eq!(rx.iter().collect::<Vec<_>>(), vec![a, b]);
}

#[test]
fn test_walk_loop_excludes_artifacts() {
    let tmp = TempDir::new().unwrap();
    let artifact = tmp.path().join("secrets.txt");
    let (ctx, run_log) = test_context(tmp.path(), vec![artifact.clone()]);
    let outcomes = vec![WalkOutcome::File(artifact)];

    let (tx, rx) = crossbeam_channel::unbounded();
    let count = run_walk_loop(tx, &ctx, outcomes.into_iter());

    assert_eq!(count, 0);
    assert_eq!(run_log.skipped_count(), 0);
    assert!(rx.iter().collect::<Vec<_>>().is_empty());
}

// --- tuning helpers ---

#[test]
fn test_effective_workers_explicit_floored_to_one() {
    assert_eq!(effective_workers(Some(0)), 1);
    assert_eq!(effective_workers(Some(8)), 8);
}

#[test]
fn test_effective_workers_default_at_least_one() {
    assert!(effective_workers(None) >= 1);
}

#[test]
fn test_should_scan_excludes_listed_paths() {
    let artifact = PathBuf::from("/out/secrets.txt");
    assert!(!should_scan(&artifact, std::slice::from_ref(&artifact)));
    assert!(should_scan(Path::new("/out/data.txt"), &[artifact]));
}
