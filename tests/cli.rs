//! Runs the compiled binary for the paths that need no network.

use std::process::Command;

#[test]
fn missing_api_key_exits_1_without_writing() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_fetch-aqi"))
        .current_dir(dir.path())
        .env_remove("MOENV_API_KEY")
        .env_remove("MOENV_DATASET")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("MOENV_API_KEY"), "stderr was: {stderr}");
    assert!(stderr.contains("❌ Configuration error"), "stderr was: {stderr}");
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("aqi.json").exists());
}

#[test]
fn blank_api_key_is_treated_as_missing() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_fetch-aqi"))
        .current_dir(dir.path())
        .env("MOENV_API_KEY", "")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("aqi.json").exists());
}
