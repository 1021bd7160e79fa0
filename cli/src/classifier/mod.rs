//! # compskip Classifier (`classifier`)
//!
//! File: cli/src/classifier/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Decides whether content is already natively compressed (audio, video,
//! archive and image codecs) so a compressing storage layer can skip a
//! pointless recompression pass.
//!
//! ## Architecture
//!
//! - **`registry`**: The set of type labels considered compressed, seeded with a baseline catalog.
//! - **`sniffer`**: The `TypeSniffer` trait that turns bytes or a file into a type label.
//! - **`signatures`**: The built-in signature database backend (default).
//! - **`libmagic`**: The system libmagic backend (feature `libmagic`).
//! - **`service`**: `CompressionClassifier`, which serializes sniffer and registry access behind one lock.
//!
//! Data flow:
//!
//! ```text
//! caller -> CompressionClassifier::is_compressed(data)
//!        -> TypeSniffer::probe_buffer(data) -> label
//!        -> CompressionTypeRegistry::contains(label) -> bool
//! ```
//!

#[cfg(feature = "libmagic")]
pub mod libmagic;
pub mod registry;
pub mod service;
pub mod signatures;
pub mod sniffer;

pub use registry::{CompressionTypeRegistry, TypeLabel, BASELINE_CATALOG};
pub use service::{Classification, CompressionClassifier};
pub use sniffer::{open_default_sniffer, TypeSniffer};
