use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn create_workspace(libs: &[&str], settings: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for lib in libs {
        fs::create_dir_all(temp_dir.path().join("libs").join(lib)).unwrap();
    }
    let vscode = temp_dir.path().join(".vscode");
    fs::create_dir_all(&vscode).unwrap();
    fs::write(vscode.join("settings.json"), settings).unwrap();
    temp_dir
}

fn run(workspace: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_update-python-paths"))
        .arg("--workspace")
        .arg(workspace)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_sync_command() {
    let workspace = create_workspace(&["lib-a"], r#"{"other": 1}"#);

    let output = run(workspace.path(), &["--quiet"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let content = fs::read_to_string(workspace.path().join(".vscode/settings.json")).unwrap();
    let settings: serde_json::Value = serde_json::from_str(&content).unwrap();
    let lib = workspace.path().join("libs/lib-a");
    assert_eq!(
        settings["python.analysis.extraPaths"],
        serde_json::json!([lib.to_str().unwrap()])
    );
    assert_eq!(settings["other"], 1);
}

#[test]
fn test_sync_command_json_report() {
    let workspace = create_workspace(&["lib-a", "lib-b"], "{}");

    let output = run(workspace.path(), &["--json", "--sort"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["changed"], true);
    assert_eq!(report["libraries"].as_array().unwrap().len(), 2);
}

#[test]
fn test_check_command_detects_drift() {
    let workspace = create_workspace(&["lib-a"], "{}");

    let output = run(workspace.path(), &["--check", "--quiet"]);
    assert!(!output.status.success());
    assert_eq!(
        fs::read_to_string(workspace.path().join(".vscode/settings.json")).unwrap(),
        "{}"
    );

    assert!(run(workspace.path(), &["--quiet"]).status.success());
    assert!(run(workspace.path(), &["--check", "--quiet"]).status.success());
}

#[test]
fn test_missing_settings_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("libs/lib-a")).unwrap();

    let output = run(temp_dir.path(), &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("settings.json"));
}

#[test]
fn test_path_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let libs = temp_dir.path().join("packages");
    fs::create_dir_all(libs.join("pkg")).unwrap();
    let settings = temp_dir.path().join("custom.json");
    fs::write(&settings, "{}").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_update-python-paths"))
        .arg("--libs-dir")
        .arg(&libs)
        .arg("--settings")
        .arg(&settings)
        .arg("--quiet")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&settings).unwrap()).unwrap();
    assert_eq!(
        value["python.autoComplete.extraPaths"],
        serde_json::json!([libs.join("pkg").to_str().unwrap()])
    );
}
