//! # compskip Stream Input (`common::fs::io`)
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `compskip check --stdin` classifies piped data with a buffer probe. This
//! module reads that input into memory, capped so a runaway pipe cannot
//! exhaust memory; a sniffer only ever looks at the leading bytes anyway.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::io::Read;
use tracing::debug;

/// Upper bound on how much of a stream is buffered for classification.
pub const MAX_STREAM_BYTES: u64 = 1024 * 1024;

/// Reads up to [`MAX_STREAM_BYTES`] from `reader`.
///
/// # Arguments
///
/// * `reader` - Any byte source, normally `std::io::stdin()`.
/// * `name` - Human-readable name used in error context.
///
/// # Returns
///
/// * `Result<Vec<u8>>` - The buffered bytes.
pub fn read_stream<R: Read>(reader: R, name: &str) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader
        .take(MAX_STREAM_BYTES)
        .read_to_end(&mut buffer)
        .with_context(|| format!("Failed to read input from {}", name))?;
    debug!("Buffered {} bytes from {}", buffer.len(), name);
    Ok(buffer)
}
