//! Integration tests for init and help commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::review_cmd;

#[test]
fn test_init_creates_default_store() {
    let temp = TempDir::new().unwrap();

    review_cmd()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized review store"));

    let content = fs::read_to_string(temp.path().join("reviews.json")).unwrap();
    assert_eq!(content, "[]");
}

#[test]
fn test_init_with_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("journal").join("monthly.json");

    review_cmd().arg("init").arg(&path).assert().success();

    assert_eq!(fs::read_to_string(path).unwrap(), "[]");
}

#[test]
fn test_init_uses_file_flag() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.json");

    review_cmd()
        .arg("--file")
        .arg(&path)
        .arg("init")
        .assert()
        .success();

    assert!(path.exists());
}

#[test]
fn test_init_uses_review_file_env() {
    let temp = TempDir::new().unwrap();

    review_cmd()
        .current_dir(temp.path())
        .env("REVIEW_FILE", "from-env.json")
        .arg("init")
        .assert()
        .success();

    assert!(temp.path().join("from-env.json").exists());
    assert!(!temp.path().join("reviews.json").exists());
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    // First init succeeds
    review_cmd()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success();

    // Second init fails
    review_cmd()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_help_lists_commands() {
    review_cmd()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("review"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_no_command_prints_hint() {
    let temp = TempDir::new().unwrap();

    review_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("--help"));
}

#[test]
fn test_unknown_command_fails() {
    review_cmd()
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn test_invalid_config_file_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("review.toml"), "questions = []\n").unwrap();

    review_cmd()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("questions must not be empty"));
}
