//! # compskip Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers that are not part of the classification logic itself:
//!
//! - **`fs`**: Expanding command-line paths into the list of files to classify.
//! - **`terminal`**: Querying the output width for column layouts.
//!

/// Path expansion for the `check` command.
pub mod fs;
/// Output width queries.
pub mod terminal;
