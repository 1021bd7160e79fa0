//! # compskip Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the classifier and the
//! command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use compskip::core::config; // For loading configuration
//! use compskip::core::error::{CompskipError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
