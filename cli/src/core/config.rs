//! # compskip Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates compskip configuration. The
//! configuration never persists the registry itself; it only seeds the same
//! runtime overrides that `--add-types` / `--remove-types` provide, plus the
//! listing width.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by the command layer, not here)
//! 2. Project-specific `.compskip.toml` in the current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! The project search stops at the first directory holding a `.git` directory.
//!
//! ## Examples
//!
//! ```toml
//! [classifier]
//! add_types = "application/zstd;image/webp"
//! remove_types = "application/pdf"
//!
//! [output]
//! width = 100
//! ```
//!
//! ```ignore
//! let cfg = config::load_config()?;
//! classifier.add_types(&cfg.classifier.add_types);
//! ```
//!
use crate::core::error::{CompskipError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runtime overrides for the compressed-type registry.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Semicolon-delimited labels to add to the baseline catalog.
    #[serde(default)]
    pub add_types: String,
    /// Semicolon-delimited labels to remove after additions are applied.
    #[serde(default)]
    pub remove_types: String,
}

/// Settings for human-readable output.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Fixed listing width. When absent the terminal is queried.
    pub width: Option<usize>,
}

const PROJECT_CONFIG_FILENAME: &str = ".compskip.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            Some(load_config_from_path(&path)?)
        }
        None => {
            debug!("No project configuration file (.compskip.toml) found in current directory or ancestors.");
            None
        }
    };
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "compskip", "compskip") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.compskip.toml`.
/// A `.git` directory marks the project boundary.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .map_err(|e| anyhow!(CompskipError::Config(e.to_string())))
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    Config {
        classifier: ClassifierConfig {
            add_types: if !project_cfg.classifier.add_types.trim().is_empty() {
                project_cfg.classifier.add_types
            } else {
                user.classifier.add_types
            },
            remove_types: if !project_cfg.classifier.remove_types.trim().is_empty() {
                project_cfg.classifier.remove_types
            } else {
                user.classifier.remove_types
            },
        },
        output: OutputConfig {
            width: project_cfg.output.width.or(user.output.width),
        },
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.output.width == Some(0) {
        return Err(anyhow!(CompskipError::Config(
            "output.width must be at least 1".to_string()
        )));
    }
    for (key, list) in [
        ("classifier.add_types", &config.classifier.add_types),
        ("classifier.remove_types", &config.classifier.remove_types),
    ] {
        for token in list.split(';').map(str::trim).filter(|t| !t.is_empty()) {
            if !token.contains('/') {
                warn!(
                    "{} entry '{}' is not of the form type/subtype and will never match.",
                    key, token
                );
            }
        }
    }
    Ok(())
}
