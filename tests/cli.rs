use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn helm_images() -> Command {
    Command::cargo_bin("helm-images").unwrap()
}

#[test]
fn test_version_prints_build_info() {
    helm_images()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("images version: {"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_get_without_chart_fails() {
    helm_images()
        .args(["get", "prometheus-standalone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CHART"));
}

#[test]
fn test_get_rejects_multiple_formats() {
    helm_images()
        .args(["get", "prom", "charts/prom", "--json", "--yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_get_reports_invalid_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("images.toml");
    fs::write(&config, "unique = \"yes\"\n").unwrap();

    helm_images()
        .arg("--config")
        .arg(&config)
        .args(["get", "prom", "charts/prom"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: failed to parse config file"));
}
