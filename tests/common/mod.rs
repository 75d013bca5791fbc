#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn review_cmd() -> Command {
    let mut cmd = Command::cargo_bin("review").unwrap();
    cmd.env_remove("REVIEW_FILE");
    cmd.env_remove("REVIEW_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn fixture(name: &str) -> PathBuf {
    Path::new("tests").join("fixtures").join(name)
}

/// Copy a fixture into `dir` as reviews.json and return its path
pub fn copy_fixture(name: &str, dir: &Path) -> PathBuf {
    let target = dir.join("reviews.json");
    fs::copy(fixture(name), &target).unwrap();
    target
}
