//! # compskip Path Expansion (`common::fs::walk`)
//!
//! File: cli/src/common/fs/walk.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns the paths given to `compskip check` into the ordered list of targets
//! to classify. Without `--recursive` every argument is classified as given
//! (a directory then reports `inode/directory`). With `--recursive`,
//! directories are replaced by the regular files beneath them, in file-name
//! order so output is stable between runs.
//!
//! Paths that do not exist are passed through unchanged: reading them is the
//! sniffer's job, and a path it cannot read is reported as unidentified.
//!
use crate::core::error::{CompskipError, Result};
use anyhow::anyhow;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// Expands `paths` into classification targets.
///
/// # Arguments
///
/// * `paths` - Paths from the command line, in order.
/// * `recursive` - Descend into directories instead of classifying them.
///
/// # Returns
///
/// * `Result<Vec<PathBuf>>` - Targets in argument order, directory contents sorted by name.
///
/// # Errors
///
/// Returns `CompskipError::FileSystem` if a directory walk fails part-way
/// (e.g. a subdirectory cannot be listed).
pub fn collect_targets(paths: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut targets = Vec::new();
    for path in paths {
        if recursive && path.is_dir() {
            debug!("Walking directory {}", path.display());
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.map_err(|e| {
                    anyhow!(CompskipError::FileSystem(format!(
                        "Failed to walk '{}': {}",
                        path.display(),
                        e
                    )))
                })?;
                if entry.file_type().is_file() {
                    targets.push(entry.into_path());
                }
            }
        } else {
            targets.push(path.clone());
        }
    }
    Ok(targets)
}
