//! Integration tests for the ct-harvest binary

use std::path::PathBuf;
use std::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED: &str = include_str!("fixtures/feed-example-corp.xml");

fn ct_harvest_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ct-harvest"))
}

#[test]
fn test_help() {
    let output = Command::new(ct_harvest_bin())
        .arg("--help")
        .output()
        .expect("Failed to execute");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--query"));
    assert!(stdout.contains("--match"));
    assert!(stdout.contains("--proxy"));
}

#[test]
fn test_missing_query() {
    let output = Command::new(ct_harvest_bin())
        .output()
        .expect("Failed to execute");
    assert!(!output.status.success());
}

#[test]
fn test_blank_query_rejected() {
    let output = Command::new(ct_harvest_bin())
        .args(["--no-color", "-q", "  "])
        .output()
        .expect("Failed to execute");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Error:"), "stderr: {}", stderr);
    assert!(stderr.contains("search term"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_report_and_export() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/atom"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "[feed]\nbase_url = \"{}\"\nretry_delay_secs = 0\n",
            mock_server.uri()
        ),
    )
    .unwrap();
    let base = dir.path().join("results");

    let output = Command::new(ct_harvest_bin())
        .arg("--no-color")
        .arg("--config")
        .arg(&config_path)
        .args(["-q", "Example Corp", "-o"])
        .arg(&base)
        .output()
        .expect("Failed to execute");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "run failed: {}", stdout);
    assert!(stdout.contains("Found:"));
    assert!(stdout.contains("- Domains:\n  - example.com\n"));
    assert!(stdout.contains("- Addresses:\n  - None\n"));
    assert!(stdout.contains("  - www.example.com\n"));

    let written = std::fs::read_to_string(dir.path().join("results.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["query"], "Example Corp");
    assert_eq!(value["certificates"].as_array().unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_stdout_with_export() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/atom"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "[feed]\nbase_url = \"{}\"\nretry_delay_secs = 0\n",
            mock_server.uri()
        ),
    )
    .unwrap();
    let base = dir.path().join("r");

    let output = Command::new(ct_harvest_bin())
        .arg("--no-color")
        .arg("--config")
        .arg(&config_path)
        .args(["-q", "Example Corp", "--json", "-o"])
        .arg(&base)
        .output()
        .expect("Failed to execute");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "run failed: {}", stdout);

    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be a single JSON document");
    assert_eq!(value["query"], "Example Corp");
    assert_eq!(value["certificates"].as_array().unwrap().len(), 1);
    assert!(dir.path().join("r.json").exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Results saved to"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_feed_failure_exits_nonzero() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/atom"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "[feed]\nbase_url = \"{}\"\nretries = 1\nretry_delay_secs = 0\n",
            mock_server.uri()
        ),
    )
    .unwrap();

    let output = Command::new(ct_harvest_bin())
        .arg("--no-color")
        .arg("--config")
        .arg(&config_path)
        .args(["-q", "example.com"])
        .output()
        .expect("Failed to execute");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Error fetching feed"), "stderr: {}", stderr);
    assert!(stderr.contains("status_code: 502"));
}
