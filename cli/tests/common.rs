//! # compskip CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test runs the
//! compiled `compskip` binary inside its own temporary directory, with the
//! user config location redirected there too, so no real configuration on the
//! host leaks into the results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// # Get compskip Command (`compskip_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `compskip` binary, running
/// in `workdir` with `HOME`/`XDG_CONFIG_HOME` pointed into it and the
/// override environment variables cleared.
///
/// ## Panics
/// Panics if the `compskip` binary cannot be found via `Command::cargo_bin`.
pub fn compskip_cmd(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("compskip").expect("Failed to find compskip binary for testing");
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env_remove("COMPSKIP_ADD_TYPES")
        .env_remove("COMPSKIP_REMOVE_TYPES")
        .env_remove("RUST_LOG");
    cmd
}

/// A scratch project directory with a `.git` marker, so the project config
/// search never climbs past it.
pub fn project_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    dir
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// A minimal but genuine gzip stream (empty payload).
pub const GZIP_EMPTY: &[u8] = b"\x1f\x8b\x08\x00\x00\x00\x00\x00\x00\x03\x03\x00\x00\x00\x00\x00\x00\x00\x00\x00";
/// PNG signature followed by the start of an IHDR chunk.
pub const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
/// Zstandard frame magic.
pub const ZSTD_HEADER: &[u8] = b"\x28\xb5\x2f\xfd\x04\x00";
