//! Basic CLI E2E tests.
//!
//! Commands run via cargo run against a throwaway home directory so the
//! trip store never touches the real one.

use std::path::Path;
use std::process::Command;

fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "tripline-cli", "--"])
        .args(args)
        .env("HOME", home)
        .env("TRIPLINE_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn trip_lifecycle() {
    let home = tempfile::tempdir().unwrap();

    let (id, _, code) = run_cli(home.path(), &["trip", "add", "Japan 2026"]);
    assert_eq!(code, 0, "trip add failed");
    let id = id.trim().to_string();
    assert!(!id.is_empty());

    let (stdout, _, code) = run_cli(home.path(), &["trip", "list"]);
    assert_eq!(code, 0, "trip list failed");
    assert!(stdout.contains("Japan 2026"));

    let (stdout, _, code) = run_cli(home.path(), &["trip", "show", &id]);
    assert_eq!(code, 0, "trip show failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["name"], "Japan 2026");

    let (stdout, _, code) = run_cli(home.path(), &["schedule", "show", &id]);
    assert_eq!(code, 0, "schedule show failed");
    assert_eq!(stdout.trim(), "[]");

    let (stdout, _, code) = run_cli(home.path(), &["routes", "show", &id]);
    assert_eq!(code, 0, "routes show failed");
    assert_eq!(stdout.trim(), "[]");

    let (_, _, code) = run_cli(home.path(), &["trip", "delete", &id]);
    assert_eq!(code, 0, "trip delete failed");

    let (_, stderr, code) = run_cli(home.path(), &["trip", "show", &id]);
    assert_ne!(code, 0);
    assert!(stderr.contains("not found"));
}

#[test]
fn export_import_round_trip() {
    let home = tempfile::tempdir().unwrap();

    let (id, _, _) = run_cli(home.path(), &["trip", "add", "Korea"]);
    let id = id.trim().to_string();

    let export_path = home.path().join("korea.json");
    let (_, _, code) = run_cli(
        home.path(),
        &["trip", "export", &id, "--out", export_path.to_str().unwrap()],
    );
    assert_eq!(code, 0, "trip export failed");

    let (new_id, _, code) = run_cli(
        home.path(),
        &["trip", "import", export_path.to_str().unwrap()],
    );
    assert_eq!(code, 0, "trip import failed");
    assert_ne!(new_id.trim(), id, "import must assign a fresh trip id");
}

#[test]
fn config_show() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config", "show"]);
    assert_eq!(code, 0, "config show failed");
    assert!(stdout.contains("[parser]"));
    assert!(stdout.contains("[geocoder]"));
}
