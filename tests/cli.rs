use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use energy_predictor::config;
use serde_json::{Value, json};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_energy-predictor");

/// `energy = total_duration + 0.5`
fn linear_artifact() -> Value {
    json!({
        "name": "linear",
        "model": { "sequential": { "layers": [ { "dense": { "dim": [6, 1] } } ] } },
        "params": [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5],
    })
}

/// Lays out `<root>/bin/energy-predictor`, plus the artifact under `<root>/data&model` if given.
fn install(artifact: Option<&Value>) -> (TempDir, PathBuf) {
    let root = tempfile::Builder::new()
        .prefix("install")
        .tempdir_in(env!("CARGO_TARGET_TMPDIR"))
        .unwrap();

    let bin_dir = root.path().join("bin");
    fs::create_dir_all(&bin_dir).unwrap();
    let exe = bin_dir.join("energy-predictor");
    // A hard link can't be held open for writing while another test spawns it
    fs::hard_link(BIN, &exe)
        .or_else(|_| fs::copy(BIN, &exe).map(drop))
        .unwrap();

    if let Some(artifact) = artifact {
        let path = config::model_path_in(root.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, artifact.to_string()).unwrap();
    }

    (root, exe)
}

fn run(exe: &Path, stdin: &str) -> Output {
    let mut child = Command::new(exe)
        .env("RUST_LOG", "debug")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The binary stops before reading stdin when the model can't be loaded
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());

    child.wait_with_output().unwrap()
}

/// Stdout must hold exactly one JSON document on one line.
fn document(output: &Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout: {stdout:?}");
    serde_json::from_str(lines[0]).unwrap()
}

#[test]
fn single_prediction_exits_successfully() {
    let (_root, exe) = install(Some(&linear_artifact()));

    let output = run(&exe, r#"{"features": {"total_duration": 10}}"#);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(document(&output), json!({"success": true, "energy": 10.5}));
}

#[test]
fn batch_with_failed_items_exits_successfully() {
    let (_root, exe) = install(Some(&linear_artifact()));

    let output = run(
        &exe,
        r#"{"batch": [{"total_duration": 2}, {"total_duration": "x"}]}"#,
    );

    assert_eq!(output.status.code(), Some(0));
    let response = document(&output);
    assert_eq!(response["results"][0]["energy"], json!(2.5));
    assert_eq!(response["results"][1]["success"], json!(false));
    assert_eq!(
        response["summary"],
        json!({"total": 2, "succeeded": 1, "failed": 1})
    );
}

#[test]
fn invalid_request_exits_with_failure() {
    let (_root, exe) = install(Some(&linear_artifact()));

    for stdin in [r#"{"foo": 1}"#, "{\"features\": ", r#"{"features": {"word_count": []}}"#] {
        let output = run(&exe, stdin);

        assert_eq!(output.status.code(), Some(1));
        let response = document(&output);
        assert_eq!(response["success"], json!(false));
        assert!(response["error"].is_string());
    }
}

#[test]
fn missing_model_exits_with_failure() {
    let (_root, exe) = install(None);

    let output = run(&exe, r#"{"features": {}}"#);

    assert_eq!(output.status.code(), Some(1));
    let response = document(&output);
    let error = response["error"].as_str().unwrap();
    assert!(error.starts_with("model file not found"));
    assert!(error.contains(config::MODEL_DIR));
    assert!(error.contains(config::MODEL_FILE));
}
