//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("revu")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("App review browser CLI"));
}

#[test]
fn test_browse_help() {
    Command::cargo_bin("revu")
        .unwrap()
        .args(["browse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Browse apps and their recent reviews",
        ));
}

#[test]
fn test_apps_help() {
    Command::cargo_bin("revu")
        .unwrap()
        .args(["apps", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List the app directory"));
}

#[test]
fn test_reviews_help() {
    Command::cargo_bin("revu")
        .unwrap()
        .args(["reviews", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Show recent reviews for one app"));
}

#[test]
fn test_reviews_requires_app_id() {
    Command::cargo_bin("revu")
        .unwrap()
        .arg("reviews")
        .assert()
        .failure()
        .stderr(predicate::str::contains("APP_ID"));
}
