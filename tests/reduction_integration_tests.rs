//! Integration tests for the nearest-neighbor reduction
//!
//! Covers the whole path:
//! 1. Loading objects from a file
//! 2. Reducing with the pipeline
//! 3. Presentation and exit status of the binary

use nn_cluster::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Write `contents` to a fresh file under the system temp dir
fn write_input(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("nn_cluster_{}_{}.txt", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

const SCENARIO: &str = "count=4\n1 0 0\n2 10 0\n3 0 10\n4 1 1\n";

const TWENTY: &str = "count=20
86 663 40
47 285 973
43 747 938
52 888 8
70 765 316
91 952 537
26 131 597
17 447 46
54 691 479
22 13 458
98 447 536
10 48 570
21 551 586
63 37 109
31 557 592
97 738 18
56 355 275
6 523 734
38 814 328
73 112 493
";

#[test]
fn test_scenario_from_file() {
    init_logger();
    let path = write_input("scenario", SCENARIO);

    let store = load_clusters(&path).unwrap();
    assert_eq!(store.len(), 4);

    let pipeline = ReductionPipeline::builder().target_clusters(2).build().unwrap();
    let result = pipeline.run(store).unwrap();

    assert_eq!(
        result.store.to_string(),
        "Clusters:\ncluster 0: 1[0,0] 3[0,10] 4[1,1]\ncluster 1: 2[10,0]\n"
    );
    assert!((result.history[0].distance - 2f32.sqrt()).abs() < 1e-6);
    assert!((result.history[1].distance - 82f32.sqrt()).abs() < 1e-4);

    fs::remove_file(path).unwrap();
}

#[test]
fn test_step_by_step_matches_one_shot() {
    init_logger();
    let one_shot = {
        let mut store = parse_clusters(TWENTY.as_bytes()).unwrap();
        reduce_to(&mut store, 8).unwrap();
        store
    };

    let mut stepped = parse_clusters(TWENTY.as_bytes()).unwrap();
    for target in (8..20).rev() {
        assert_eq!(reduce_to(&mut stepped, target).unwrap(), target);
    }

    assert_eq!(stepped, one_shot);
    assert_eq!(stepped.total_objects(), 20);
    for cluster in &stepped {
        let ids = cluster.ids();
        assert!(ids.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_every_object_survives_reduction() {
    init_logger();
    let original = parse_clusters(TWENTY.as_bytes()).unwrap();
    let mut expected: Vec<i32> = original.iter().flat_map(|c| c.ids()).collect();
    expected.sort();

    let pipeline = ReductionPipeline::builder().target_clusters(1).build().unwrap();
    let result = pipeline.run(original).unwrap();

    assert_eq!(result.store.len(), 1);
    assert_eq!(result.store.get(0).unwrap().ids(), expected);
    assert_eq!(result.history.len(), 19);
    for pair in result.history.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
    }
}

#[test]
fn test_malformed_file_returns_format_error() {
    init_logger();
    let path = write_input("malformed", "count=3\n1 0 0\n2 x 0\n3 5 5\n");
    let result = load_clusters(&path);
    assert!(matches!(result, Err(ClusterError::Format { line: 3, .. })));
    fs::remove_file(path).unwrap();
}

#[test]
fn test_binary_prints_clusters() {
    let path = write_input("binary_ok", SCENARIO);
    let output = Command::new(env!("CARGO_BIN_EXE_nn_cluster"))
        .arg(&path)
        .arg("2")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Clusters:\ncluster 0: 1[0,0] 3[0,10] 4[1,1]\ncluster 1: 2[10,0]\n"
    );
    fs::remove_file(path).unwrap();
}

#[test]
fn test_binary_defaults_to_one_cluster() {
    let path = write_input("binary_default", SCENARIO);
    let output = Command::new(env!("CARGO_BIN_EXE_nn_cluster"))
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Clusters:\ncluster 0: 1[0,0] 2[10,0] 3[0,10] 4[1,1]\n"
    );
    fs::remove_file(path).unwrap();
}

#[test]
fn test_binary_errors_print_nothing_on_stdout() {
    let path = write_input("binary_err", "count=2\n1 0 0\n2 0 2000\n");

    let cases: Vec<(Vec<String>, &str)> = vec![
        (vec![], "Invalid arguments"),
        (vec![path.display().to_string(), "0".into()], "Invalid arguments"),
        (vec![path.display().to_string(), "-1".into()], "Invalid arguments"),
        (vec!["/nonexistent/objekty".into()], "File read error"),
        (vec![path.display().to_string()], "Input format error"),
    ];

    for (args, message) in cases {
        let output = Command::new(env!("CARGO_BIN_EXE_nn_cluster"))
            .args(&args)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1), "args {:?}", args);
        assert!(output.stdout.is_empty(), "args {:?}", args);
        // log lines may precede the message when RUST_LOG is set
        let stderr = String::from_utf8_lossy(&output.stderr);
        let last = stderr.lines().last().unwrap_or_default();
        assert!(last.starts_with(message), "args {:?}: {}", args, stderr);
    }
    fs::remove_file(path).unwrap();
}
