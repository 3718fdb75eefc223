//! Tests for the binary's command line, run against the built executable.

mod common;

use common::{breweries_json, temp_config, MockResponse, MockServer};
use std::process::{Command, Output};

fn microbrew_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_microbrew"));
    cmd.env_remove("MICROBREW_LOG");
    cmd
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run_print(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        microbrew_cmd()
            .arg("--print")
            .args(args)
            .output()
            .expect("Failed to execute command")
    })
    .await
    .unwrap()
}

#[test]
fn test_help_lists_flags() {
    let output = microbrew_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    for flag in ["--endpoint", "--page-size", "--search", "--sort", "--desc", "--print"] {
        assert!(stdout.contains(flag), "missing {flag} in help: {stdout}");
    }
}

#[test]
fn test_invalid_sort_value_is_rejected() {
    let output = microbrew_cmd()
        .args(["--sort", "city"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"), "got: {stderr}");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_config("[view]\npage_size = 0\n");
    let output = microbrew_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--print")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: Config validation failed"), "got: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_print_mode_renders_filtered_sorted_page() {
    let server = MockServer::start().await;
    server
        .enqueue_response(MockResponse::json(&breweries_json(&[
            ("Zeta", "micro", "San Diego", "CA", None),
            ("Alpha", "micro", "Albany", "NY", Some("http://alpha.example")),
            ("Huge", "large", "Albany", "NY", None),
        ])))
        .await;
    let (_dir, config) = temp_config("");

    let output = run_print(vec![
        "--config".into(),
        config.display().to_string(),
        "--endpoint".into(),
        server.endpoint(),
    ])
    .await;

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let alpha = stdout.find("Alpha").expect("Alpha printed");
    let zeta = stdout.find("Zeta").expect("Zeta printed");
    assert!(alpha < zeta);
    assert!(!stdout.contains("Huge"));
    assert!(stdout.contains("1-2 of 2"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_print_mode_search_is_case_insensitive() {
    let server = MockServer::start().await;
    server
        .enqueue_response(MockResponse::json(&breweries_json(&[
            ("Zeta", "micro", "San Diego", "CA", None),
            ("Alpha", "micro", "Albany", "NY", None),
        ])))
        .await;
    let (_dir, config) = temp_config("");

    let output = run_print(vec![
        "--config".into(),
        config.display().to_string(),
        "--endpoint".into(),
        server.endpoint(),
        "--search".into(),
        "ny".into(),
    ])
    .await;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Alpha"));
    assert!(!stdout.contains("Zeta"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_print_mode_http_500_shows_error_not_table() {
    let server = MockServer::start().await;
    server.enqueue_response(MockResponse::error(500)).await;
    let (_dir, config) = temp_config("");

    let output = run_print(vec![
        "--config".into(),
        config.display().to_string(),
        "--endpoint".into(),
        server.endpoint(),
    ])
    .await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Error fetching data: 500"), "got: {stderr}");
    assert!(output.stdout.is_empty());
}
