//! Integration tests for top-level CLI behavior.

use std::path::{Path, PathBuf};
use std::process::Command;

fn store_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("alma_cli_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn run_alma(store: &Path, args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_alma");
    Command::new(bin)
        .args(args)
        .env("ALMA_STORE", store)
        .env("ALMA_TODAY", "2024-01-01")
        .output()
        .expect("failed to run alma binary")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn next_on_empty_store_starts_at_one() {
    let store = store_dir("next_empty");
    let output = run_alma(&store, &["next", "request"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "REQ-001-01012024");
}

#[test]
fn generate_counts_matching_ids_only() {
    let store = store_dir("generate");
    let output = run_alma(
        &store,
        &["generate", "LOSS", "LOSS-001-01012024", "LOSS-002-01012024", "REQ-001-01012024"],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "LOSS-003-01012024");
}

#[test]
fn generate_ignores_malformed_and_stale_ids() {
    let store = store_dir("generate_malformed");
    let output =
        run_alma(&store, &["generate", "REQ", "garbage", "REQ-001", "REQ-001-31122023"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "REQ-001-01012024");
}

#[test]
fn requests_are_numbered_and_persisted() {
    let store = store_dir("requests");
    for item in ["Gloves", "Goggles", "Beakers"] {
        let output = run_alma(
            &store,
            &["request", "--item", item, "--quantity", "3", "--requester", "prof-kim"],
        );
        assert!(output.status.success());
    }
    let listed = stdout(&run_alma(&store, &["list", "request"]));
    assert!(listed.contains("REQ-001-01012024"));
    assert!(listed.contains("REQ-003-01012024"));
    assert!(listed.contains("3 record(s) total."));

    let next = run_alma(&store, &["next", "request"]);
    assert_eq!(stdout(&next).trim(), "REQ-004-01012024");
    assert_eq!(stdout(&run_alma(&store, &["next", "loss"])).trim(), "LOSS-001-01012024");

    let _ = std::fs::remove_dir_all(&store);
}

#[test]
fn status_transitions_are_enforced() {
    let store = store_dir("status");
    let created = run_alma(
        &store,
        &["request", "--item", "Gloves", "--quantity", "1", "--requester", "ana"],
    );
    assert!(created.status.success());

    let refused = run_alma(&store, &["status", "REQ-001-01012024", "delivered"]);
    assert!(!refused.status.success());
    assert!(String::from_utf8_lossy(&refused.stderr).contains("cannot move"));

    let approved = run_alma(&store, &["status", "REQ-001-01012024", "approved"]);
    assert!(approved.status.success());
    assert!(stdout(&approved).contains("pending -> approved"));

    let _ = std::fs::remove_dir_all(&store);
}

#[test]
fn invalid_today_is_reported() {
    let store = store_dir("bad_today");
    let output = Command::new(env!("CARGO_BIN_EXE_alma"))
        .args(["next", "loss"])
        .env("ALMA_STORE", &store)
        .env("ALMA_TODAY", "yesterday")
        .output()
        .expect("failed to run alma binary");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ALMA_TODAY"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let store = store_dir("invalid");
    let output = run_alma(&store, &["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
