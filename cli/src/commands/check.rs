//! # compskip Check Command
//!
//! File: cli/src/commands/check.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `compskip check`, which reports for each file
//! whether it is already in a natively compressed format. It handles:
//! - Expanding the given paths (optionally recursing into directories)
//! - Classifying files concurrently against one shared classifier
//! - Classifying stdin with a buffer probe (`--stdin`)
//! - Printing one line per target and a summary
//!
//! ## Architecture
//!
//! Every file is classified on a `tokio::task::spawn_blocking` worker. The
//! workers share an `Arc<CompressionClassifier>`, whose lock serializes the
//! actual probes; results are printed in argument order once all workers finish.
//!
//! ## Examples
//!
//! ```bash
//! compskip check photo.jpg notes.txt
//! compskip check --recursive ./uploads
//! cat blob.bin | compskip check --stdin
//! ```
//!
//! Example output:
//!
//! ```text
//! photo.jpg: compressed (image/jpeg)
//! notes.txt: not compressed (text/plain)
//! 1 of 2 file(s) already compressed
//! ```
//!
use super::RegistryArgs;
use compskip::classifier::{Classification, CompressionClassifier};
use compskip::common::fs::{io, walk};
use compskip::core::config;
use compskip::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// # Check Arguments (`CheckArgs`)
///
/// Paths to classify, or `--stdin` to classify piped data instead.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Files or directories to classify
    #[arg(value_name = "PATH", required_unless_present = "stdin", conflicts_with = "stdin")]
    pub paths: Vec<PathBuf>,
    /// Classify the files inside directories instead of the directories themselves
    #[arg(short, long)]
    pub recursive: bool,
    /// Read the data to classify from standard input
    #[arg(long)]
    pub stdin: bool,
}

/// # Handle Check Command (`handle_check`)
///
/// ## Workflow:
/// 1. Loads configuration and opens the classifier with all overrides applied.
/// 2. For `--stdin`, buffers stdin and classifies it with a buffer probe.
/// 3. Otherwise expands the paths and classifies each file concurrently.
/// 4. Prints one line per target, then a summary line.
///
/// ## Returns
///
/// * `Result<()>` - `Err` if configuration, the signature database, stdin or a directory walk fails.
///   Individual unreadable files are reported as `unknown`, not as errors.
pub async fn handle_check(args: CheckArgs, overrides: &RegistryArgs) -> Result<()> {
    info!("Handling check command...");
    let cfg = config::load_config().context("Failed to load compskip configuration")?;
    let classifier = super::open_classifier(&cfg, overrides)?;

    if args.stdin {
        let data = tokio::task::spawn_blocking(|| io::read_stream(std::io::stdin(), "stdin"))
            .await
            .context("Stdin reader task failed")??;
        let result = classifier.classify(&data);
        println!("{}", format_result("-", &result));
        return Ok(());
    }

    let targets = walk::collect_targets(&args.paths, args.recursive)?;
    debug!("Classifying {} target(s)", targets.len());
    let results = classify_all(classifier, targets).await?;

    for (path, result) in &results {
        println!("{}", format_result(&path.display().to_string(), result));
    }
    let compressed = results.iter().filter(|(_, r)| r.compressed).count();
    println!("{}", format_summary(compressed, results.len()));
    Ok(())
}

/// Classifies every target on a blocking worker and returns the results in input order.
async fn classify_all(
    classifier: Arc<CompressionClassifier>,
    targets: Vec<PathBuf>,
) -> Result<Vec<(PathBuf, Classification)>> {
    let handles: Vec<_> = targets
        .into_iter()
        .map(|path| {
            let classifier = Arc::clone(&classifier);
            tokio::task::spawn_blocking(move || {
                let result = classifier.classify_file(&path);
                (path, result)
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await.context("Classification worker failed")?);
    }
    Ok(results)
}

fn format_result(name: &str, result: &Classification) -> String {
    let verdict = if result.compressed {
        "compressed"
    } else {
        "not compressed"
    };
    let label = result.label.as_deref().unwrap_or("unknown");
    format!("{}: {} ({})", name, verdict, label)
}

fn format_summary(compressed: usize, total: usize) -> String {
    format!("{} of {} file(s) already compressed", compressed, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_format_result() {
        let hit = Classification {
            label: Some("image/jpeg".into()),
            compressed: true,
        };
        let miss = Classification {
            label: Some("text/plain".into()),
            compressed: false,
        };
        let unknown = Classification {
            label: None,
            compressed: false,
        };
        assert_eq!(format_result("a.jpg", &hit), "a.jpg: compressed (image/jpeg)");
        assert_eq!(format_result("b.txt", &miss), "b.txt: not compressed (text/plain)");
        assert_eq!(format_result("-", &unknown), "-: not compressed (unknown)");
    }

    #[test]
    fn test_format_summary() {
        assert_eq!(format_summary(1, 3), "1 of 3 file(s) already compressed");
    }

    #[tokio::test]
    async fn test_classify_all_keeps_input_order() -> Result<()> {
        let dir = tempdir()?;
        let mut targets = Vec::new();
        for i in 0..20 {
            let path = dir.path().join(format!("f{:02}", i));
            if i % 2 == 0 {
                fs::write(&path, b"\x1f\x8b\x08\x00\x00\x00\x00\x00")?;
            } else {
                fs::write(&path, b"plain text\n")?;
            }
            targets.push(path);
        }
        targets.push(dir.path().join("missing"));

        let classifier = Arc::new(CompressionClassifier::open_default()?);
        let results = classify_all(classifier, targets.clone()).await?;

        let paths: Vec<PathBuf> = results.iter().map(|(p, _)| p.clone()).collect();
        assert_eq!(paths, targets);
        for (i, (_, result)) in results.iter().take(20).enumerate() {
            assert_eq!(result.compressed, i % 2 == 0);
        }
        assert_eq!(results[20].1.label, None);
        Ok(())
    }
}
