//! # Compression Classifier (`classifier::service`)
//!
//! File: cli/src/classifier/service.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `CompressionClassifier` answers one question for a compressing storage
//! layer: is this buffer (or file) already in a natively compressed format?
//! It owns a [`TypeSniffer`] and a [`CompressionTypeRegistry`] and puts both
//! behind a single mutex.
//!
//! ## Concurrency
//!
//! Sniffer probes are not safe to run concurrently, so every probe and every
//! registry read or mutation goes through the same lock. Decisions, additions
//! and removals from any number of threads are therefore totally ordered.
//! File probes do their I/O while the lock is held; only one header read runs
//! at a time per classifier.
//!
//! ## Examples
//!
//! ```ignore
//! use compskip::classifier::CompressionClassifier;
//! use std::sync::Arc;
//!
//! let classifier = Arc::new(CompressionClassifier::open_default()?);
//! classifier.add_types("application/zstd");
//! if classifier.is_compressed(&block) {
//!     // store the block as-is
//! }
//! ```
//!
use super::registry::CompressionTypeRegistry;
use super::sniffer::{open_default_sniffer, TypeSniffer};
use crate::common::terminal::WidthSource;
use crate::core::error::Result;
use parking_lot::Mutex;
use std::path::Path;
use tracing::debug;

/// Outcome of a single probe: the label the sniffer reported, if any, and the decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub label: Option<String>,
    pub compressed: bool,
}

struct ClassifierState {
    registry: CompressionTypeRegistry,
    sniffer: Box<dyn TypeSniffer>,
}

impl ClassifierState {
    fn decide(&self, label: Option<String>) -> Classification {
        let compressed = label
            .as_deref()
            .is_some_and(|label| self.registry.contains(label));
        match (&label, compressed) {
            (Some(l), true) => debug!("Data identified as already compressed ({})", l),
            (Some(l), false) => debug!("Data identified as not compressed ({})", l),
            (None, _) => debug!("Data identified as not compressed (no type reported)"),
        }
        Classification { label, compressed }
    }
}

/// # Compression Classifier (`CompressionClassifier`)
///
/// Exclusive owner of a sniffer and the compressed-type registry. Share it
/// between threads with `Arc`; the sniffer is released when the last
/// reference is dropped.
pub struct CompressionClassifier {
    state: Mutex<ClassifierState>,
}

impl CompressionClassifier {
    /// Builds a classifier around `sniffer`, seeded with the baseline catalog.
    pub fn new(sniffer: Box<dyn TypeSniffer>) -> Self {
        Self::with_registry(sniffer, CompressionTypeRegistry::with_baseline())
    }

    pub fn with_registry(sniffer: Box<dyn TypeSniffer>, registry: CompressionTypeRegistry) -> Self {
        debug!(
            "Classifier created with '{}' sniffer and {} compressed types",
            sniffer.backend(),
            registry.len()
        );
        Self {
            state: Mutex::new(ClassifierState { registry, sniffer }),
        }
    }

    /// # Open Default Classifier (`open_default`)
    ///
    /// Loads the default signature database and seeds the baseline catalog.
    ///
    /// ## Returns
    ///
    /// * `Result<Self>` - `Err` when the database cannot be loaded. There is no
    ///   fallback; the owning process is expected to log and exit.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(open_default_sniffer()?))
    }

    /// Probes `data` and reports the label together with the decision.
    pub fn classify(&self, data: &[u8]) -> Classification {
        let mut state = self.state.lock();
        let label = state.sniffer.probe_buffer(data);
        state.decide(label)
    }

    /// Probes the file at `path`. The read happens while the lock is held.
    pub fn classify_file(&self, path: &Path) -> Classification {
        let mut state = self.state.lock();
        let label = state.sniffer.probe_file(path);
        state.decide(label)
    }

    /// `true` when `data` is in a format listed in the registry. An
    /// unidentified buffer is simply not compressed.
    pub fn is_compressed(&self, data: &[u8]) -> bool {
        self.classify(data).compressed
    }

    pub fn is_file_compressed(&self, path: &Path) -> bool {
        self.classify_file(path).compressed
    }

    /// Adds every label of a `;`-delimited list.
    pub fn add_types(&self, list: &str) {
        let mut state = self.state.lock();
        state.registry.add(list);
        debug!("Added compressed types '{}' ({} total)", list, state.registry.len());
    }

    /// Removes every label of a `;`-delimited list; unknown labels are ignored.
    pub fn remove_types(&self, list: &str) {
        let mut state = self.state.lock();
        state.registry.remove(list);
        debug!("Removed compressed types '{}' ({} total)", list, state.registry.len());
    }

    /// Exact registry lookup, without normalization.
    pub fn contains(&self, label: &str) -> bool {
        self.state.lock().registry.contains(label)
    }

    /// Snapshot of the registry in lexicographic order.
    pub fn type_labels(&self) -> Vec<String> {
        self.state
            .lock()
            .registry
            .iter()
            .map(|label| label.to_string())
            .collect()
    }

    /// Column listing of the registry for a display `width` characters wide.
    pub fn describe(&self, width: usize) -> String {
        self.state.lock().registry.format(width)
    }

    /// Like [`describe`](Self::describe), asking `source` for the width first.
    /// The width query runs outside the lock.
    pub fn describe_with(&self, source: &dyn WidthSource) -> String {
        let width = source.columns();
        self.describe(width)
    }

    pub fn backend(&self) -> &'static str {
        self.state.lock().sniffer.backend()
    }
}

impl std::fmt::Debug for CompressionClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("CompressionClassifier")
            .field("backend", &state.sniffer.backend())
            .field("types", &state.registry.len())
            .finish()
    }
}
