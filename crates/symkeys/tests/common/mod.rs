//! Shared fixtures for symkeys integration tests.
//!
//! Every test gets its own temporary workspace with the sample vendor table
//! copied to the default input location, so commands can run without flags.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub fn fixture_table() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("DefaultShortcutsTable.xml")
}

/// A temp dir laid out like a checkout: `data/DefaultShortcutsTable.xml`.
pub fn workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).expect("create data dir");
    std::fs::copy(fixture_table(), data.join("DefaultShortcutsTable.xml")).expect("copy fixture");
    dir
}

pub fn symkeys(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_symkeys"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

/// Run `symkeys build` in `dir` and return the written document text.
pub fn build_in(dir: &Path) -> String {
    symkeys(dir).arg("build").assert().success();
    std::fs::read_to_string(dir.join("data").join("symbolic-hotkeys.json")).expect("read document")
}
