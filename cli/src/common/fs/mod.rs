//! # compskip Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Filesystem helpers used by the `check` command before anything reaches the
//! classifier:
//!
//! - **`io`**: Reading a whole input stream (stdin) into a buffer for a buffer probe.
//! - **`walk`**: Expanding command-line paths, optionally recursing into directories.
//!
//! The classifier never calls into this module; it reads file headers through
//! its sniffer.
//!

/// Whole-stream reads.
pub mod io;
/// Path expansion with `walkdir`.
pub mod walk;
