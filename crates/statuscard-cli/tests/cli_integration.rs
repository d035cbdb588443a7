//! CLI Integration Tests
//!
//! These tests run the `statuscard` binary end-to-end against wiremock
//! servers standing in for the presence API and the quotes file.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("statuscard").expect("Failed to find statuscard binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

/// Point the command at `server` for both providers
fn against(cmd: &mut Command, server: &MockServer) {
    cmd.arg("--presence-base")
        .arg(format!("{}/v1/users", server.uri()))
        .arg("--quotes-url")
        .arg(format!("{}/quotes.txt", server.uri()))
        .arg("--user-id")
        .arg("42");
}

async fn mount_presence(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/users/42"))
        .and(header("cache-control", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_quotes(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/quotes.txt"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

fn online_body() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "data": {
            "discord_user": {"id": "42", "username": "moon", "discriminator": "0", "avatar": null},
            "discord_status": "online",
            "activities": [
                {"type": 4, "name": "Custom Status", "state": "brb"},
                {"type": 0, "name": "Factorio", "details": "Building"}
            ],
            "listening_to_spotify": false
        }
    })
}

// ============================================================================
// Elapsed Command Tests
// ============================================================================

#[test]
fn test_elapsed_buckets() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["elapsed", "11100000"])
        .assert()
        .success()
        .stdout("3h 5min\n");

    cli_cmd(&data_dir)
        .args(["elapsed", "90000"])
        .assert()
        .success()
        .stdout("1min\n");
}

#[test]
fn test_elapsed_negative_is_just_now() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["elapsed", "-5000"])
        .assert()
        .success()
        .stdout("just now\n");
}

// ============================================================================
// Once Command Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_once_prints_card() {
    let server = MockServer::start().await;
    mount_presence(&server, online_body()).await;
    mount_quotes(&server, 200, "alpha\n\n  beta  \r\ngamma\n").await;

    let data_dir = TempDir::new().unwrap();
    let mut cmd = cli_cmd(&data_dir);
    against(&mut cmd, &server);

    cmd.arg("once")
        .assert()
        .success()
        .stdout(predicate::str::contains("moon"))
        .stdout(predicate::str::contains("#0 • 42"))
        .stdout(predicate::str::contains("* ONLINE"))
        .stdout(predicate::str::contains("> Factorio"))
        .stdout(predicate::str::contains("Quotes: 3"))
        .stdout(predicate::str::contains("Last updated: "));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_once_json_includes_snapshot() {
    let server = MockServer::start().await;
    mount_presence(&server, online_body()).await;
    mount_quotes(&server, 200, "only quote").await;

    let data_dir = TempDir::new().unwrap();
    let mut cmd = cli_cmd(&data_dir);
    against(&mut cmd, &server);

    let output = cmd.args(["once", "--json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["presence_ok"], true);
    assert_eq!(report["quotes_loaded"], true);
    assert_eq!(report["card"]["quote_text"], "only quote");
    assert_eq!(report["card"]["activity"]["variant"], "activity");
    assert_eq!(report["snapshot"]["discord_status"], "online");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_once_with_failing_providers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/42"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    mount_quotes(&server, 404, "").await;

    let data_dir = TempDir::new().unwrap();
    let mut cmd = cli_cmd(&data_dir);
    against(&mut cmd, &server);

    cmd.arg("once")
        .assert()
        .success()
        .stdout(predicate::str::contains("* OFFLINE"))
        .stdout(predicate::str::contains("Failed to load quotes."))
        .stdout(predicate::str::contains("Quotes:").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failures_are_written_to_diagnostics() {
    let server = MockServer::start().await;
    mount_presence(&server, serde_json::json!({"success": false, "data": null})).await;
    mount_quotes(&server, 200, "q").await;

    let data_dir = TempDir::new().unwrap();
    let mut cmd = cli_cmd(&data_dir);
    against(&mut cmd, &server);
    cmd.arg("once").assert().success();

    let entries = statuscard_core::read_entries(data_dir.path().join("logs")).unwrap();
    let failure = entries
        .iter()
        .find(|e| e.msg == "Presence poll failed")
        .expect("presence failure logged");
    assert_eq!(failure.level, "error");
    assert_eq!(failure.instance, "cli");
    assert_eq!(
        failure.field("error"),
        Some(&serde_json::json!("Malformed presence response"))
    );

    cli_cmd(&data_dir)
        .args(["logs", "--level", "error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Presence poll failed"))
        .stdout(predicate::str::contains("Quotes loaded").not());
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_invalid_config_is_rejected() {
    let data_dir = TempDir::new().unwrap();
    let config = data_dir.path().join("card.json");
    std::fs::write(&config, r#"{"poll_interval_ms": 0}"#).unwrap();

    cli_cmd(&data_dir)
        .arg("--config")
        .arg(&config)
        .arg("once")
        .assert()
        .failure()
        .stderr(predicate::str::contains("poll_interval_ms"));
}

#[test]
fn test_logs_without_history() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("logs")
        .assert()
        .success()
        .stdout(predicate::str::contains("No log entries."));
}
