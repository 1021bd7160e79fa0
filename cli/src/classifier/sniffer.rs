//! # Content-Type Sniffing (`classifier::sniffer`)
//!
//! File: cli/src/classifier/sniffer.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A sniffer turns a byte buffer or a file into a content-type label such as
//! `application/x-gzip`. Sniffers are stateful: a probe may update internal
//! error state, which is why the probe methods take `&mut self` and why the
//! classifier only calls them while holding its lock.
//!
//! Backends:
//! - [`SignatureSniffer`](super::signatures::SignatureSniffer): built-in signature database (default)
//! - `LibmagicSniffer`: the system libmagic, enabled with the `libmagic` feature
//!
//! Sniffers must report the bare MIME type (no `; charset=` suffix) and must
//! leave a probed file's last-access time as they found it.
//!
use crate::core::error::Result;
use std::path::Path;

/// # Type Sniffer (`TypeSniffer`)
///
/// Identifies content from its leading bytes. `None` means "not identified"
/// and is a normal outcome, including for files that could not be read.
pub trait TypeSniffer: Send {
    /// Identifies an in-memory buffer.
    fn probe_buffer(&mut self, data: &[u8]) -> Option<String>;

    /// Identifies the file at `path`, reading at most a header's worth of bytes.
    fn probe_file(&mut self, path: &Path) -> Option<String>;

    /// Short backend name for diagnostics.
    fn backend(&self) -> &'static str;
}

/// Opens the default sniffer backend for the enabled feature set.
///
/// A failure here means the signature database is unusable; there is no
/// degraded mode, so callers are expected to treat it as fatal.
#[cfg(not(feature = "libmagic"))]
pub fn open_default_sniffer() -> Result<Box<dyn TypeSniffer>> {
    Ok(Box::new(super::signatures::SignatureSniffer::load_default()?))
}

#[cfg(feature = "libmagic")]
pub fn open_default_sniffer() -> Result<Box<dyn TypeSniffer>> {
    Ok(Box::new(super::libmagic::LibmagicSniffer::open()?))
}
