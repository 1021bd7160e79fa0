//! # compskip Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the `compskip` binary and the
//! pieces they share: the global registry override flags and the construction
//! of the classifier from configuration plus those flags.
//!
//! ## Command Groups
//!
//! - `check`: Classify files (or stdin) as already compressed or not
//! - `types`: List the types currently treated as compressed
//!
//! ## Override Order
//!
//! The classifier starts from the baseline catalog, then applies:
//! 1. `classifier.add_types` / `classifier.remove_types` from configuration
//! 2. `--add-types` / `--remove-types` from the command line
//!
//! Additions are applied before removals at each step, so a label named in
//! both lists ends up absent.
//!
use compskip::classifier::CompressionClassifier;
use compskip::core::config::Config;
use compskip::core::error::Result;
use anyhow::Context;
use clap::Args;
use std::sync::Arc;
use tracing::info;

/// Classify files or stdin.
pub mod check;
/// List the compressed-type registry.
pub mod types;

/// Registry overrides accepted by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct RegistryArgs {
    /// Semicolon-delimited types to treat as compressed (e.g. "application/zstd;image/webp")
    #[arg(long, global = true, value_name = "LIST", env = "COMPSKIP_ADD_TYPES")]
    pub add_types: Option<String>,
    /// Semicolon-delimited types to stop treating as compressed
    #[arg(long, global = true, value_name = "LIST", env = "COMPSKIP_REMOVE_TYPES")]
    pub remove_types: Option<String>,
}

/// # Open Classifier (`open_classifier`)
///
/// Loads the default signature database and applies configuration and
/// command-line overrides.
///
/// ## Returns
///
/// * `Result<Arc<CompressionClassifier>>` - Shared classifier ready for concurrent use.
/// * `Err` - The signature database could not be loaded. The caller treats this as fatal.
pub fn open_classifier(cfg: &Config, overrides: &RegistryArgs) -> Result<Arc<CompressionClassifier>> {
    let classifier = CompressionClassifier::open_default()
        .context("Failed to load the content signature database")?;
    apply_overrides(&classifier, cfg, overrides);
    info!(
        "Classifier ready ({} backend, {} compressed types)",
        classifier.backend(),
        classifier.type_labels().len()
    );
    Ok(Arc::new(classifier))
}

fn apply_overrides(classifier: &CompressionClassifier, cfg: &Config, overrides: &RegistryArgs) {
    classifier.add_types(&cfg.classifier.add_types);
    classifier.remove_types(&cfg.classifier.remove_types);
    if let Some(list) = &overrides.add_types {
        classifier.add_types(list);
    }
    if let Some(list) = &overrides.remove_types {
        classifier.remove_types(list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compskip::core::config::ClassifierConfig;

    #[test]
    fn test_overrides_apply_config_then_flags() {
        let cfg = Config {
            classifier: ClassifierConfig {
                add_types: "application/zstd;image/webp".into(),
                remove_types: "application/pdf".into(),
            },
            ..Default::default()
        };
        let flags = RegistryArgs {
            add_types: Some("application/pdf".into()),
            remove_types: Some("IMAGE/WEBP".into()),
        };

        let classifier = CompressionClassifier::open_default().unwrap();
        apply_overrides(&classifier, &cfg, &flags);

        assert!(classifier.contains("application/zstd"));
        assert!(classifier.contains("application/pdf"));
        assert!(!classifier.contains("image/webp"));
    }

    #[test]
    fn test_no_overrides_keeps_baseline() {
        let classifier = CompressionClassifier::open_default().unwrap();
        apply_overrides(&classifier, &Config::default(), &RegistryArgs::default());
        assert_eq!(
            classifier.type_labels().len(),
            compskip::classifier::BASELINE_CATALOG.len()
        );
    }
}
