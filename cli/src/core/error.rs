//! # compskip Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout compskip. It follows a
//! two-layer approach:
//! - `CompskipError`: A `thiserror` enum naming the failure classes compskip itself raises
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so call sites can attach context
//!
//! The classifier has very few genuine failure classes. A probe that yields no
//! label is a negative decision, not an error, and removing an absent type is a
//! no-op. What remains:
//! - Configuration errors (malformed or invalid TOML)
//! - Signature database errors (the sniffer backend could not be initialized)
//! - Filesystem errors (paths handed to the CLI that cannot be read or walked)
//!
//! ## Examples
//!
//! ```ignore
//! // Raise a specific error
//! return Err(CompskipError::SignatureDatabase("no signatures loaded".into()))?;
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for compskip.
#[derive(Error, Debug)]
pub enum CompskipError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Signature database error: {0}")]
    SignatureDatabase(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
