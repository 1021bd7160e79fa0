//! # compskip Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! compskip tells a compressing storage layer which data is already in a
//! natively compressed format (JPEG, MP3, gzip, Matroska, ...), so the layer
//! can store it as-is instead of spending CPU on a recompression pass that
//! cannot shrink it.
//!
//! The library is organized like the binary that ships with it:
//! - `classifier`: The registry, the sniffer backends and `CompressionClassifier`
//! - `common`: Path expansion, stream input and terminal width helpers
//! - `core`: Configuration and error handling
//!
//! ## Examples
//!
//! ```rust,no_run
//! use compskip::classifier::CompressionClassifier;
//!
//! # fn main() -> anyhow::Result<()> {
//! let classifier = CompressionClassifier::open_default()?;
//! classifier.add_types("application/zstd;image/webp");
//! assert!(classifier.is_compressed(b"\x1f\x8b\x08\x00"));
//! # Ok(())
//! # }
//! ```
//!
pub mod classifier;
pub mod common;
pub mod core;
