//! # libmagic Backend (`classifier::libmagic`)
//!
//! File: cli/src/classifier/libmagic.rs
//! Author: Christi Mahu
//!
//! Only compiled with the `libmagic` feature. Wraps a libmagic cookie opened
//! in "MIME type only" mode with access-time preservation and loaded from the
//! system's default magic database.
//!
//! Older libmagic releases spell the type-only mode `MAGIC_MIME` (newer ones
//! redefine that name as type + encoding and call type-only
//! `MAGIC_MIME_TYPE`). The flag choice lives in [`TYPE_ONLY_FLAGS`] so a
//! build against a legacy library changes exactly one line.
//!
use super::sniffer::TypeSniffer;
use crate::core::error::{CompskipError, Result};
use anyhow::anyhow;
use magic::cookie::{Cookie, DatabasePaths, Flags, Load};
use std::path::Path;
use tracing::debug;

/// Report the bare MIME type and leave probed files' atime untouched.
const TYPE_ONLY_FLAGS: Flags = Flags::MIME_TYPE.union(Flags::PRESERVE_ATIME);

pub struct LibmagicSniffer {
    cookie: Cookie<Load>,
}

// SAFETY: a libmagic cookie has no thread affinity; it only must not be used
// from two threads at once. The classifier hands out `&mut` access to its
// sniffer solely under its mutex.
unsafe impl Send for LibmagicSniffer {}

impl LibmagicSniffer {
    /// Opens a cookie and loads the default database. The cookie is closed when
    /// the sniffer is dropped.
    pub fn open() -> Result<Self> {
        let cookie = Cookie::open(TYPE_ONLY_FLAGS).map_err(|e| {
            anyhow!(CompskipError::SignatureDatabase(format!(
                "magic_open failed: {}",
                e
            )))
        })?;
        let cookie = cookie.load(&DatabasePaths::default()).map_err(|e| {
            anyhow!(CompskipError::SignatureDatabase(format!(
                "magic_load failed: {}",
                e
            )))
        })?;
        debug!("libmagic cookie opened with the default database");
        Ok(Self { cookie })
    }
}

impl TypeSniffer for LibmagicSniffer {
    fn probe_buffer(&mut self, data: &[u8]) -> Option<String> {
        match self.cookie.buffer(data) {
            Ok(label) => Some(label),
            Err(e) => {
                debug!("magic_buffer failed: {}", e);
                None
            }
        }
    }

    fn probe_file(&mut self, path: &Path) -> Option<String> {
        match self.cookie.file(path) {
            Ok(label) => Some(label),
            Err(e) => {
                debug!("magic_file failed for '{}': {}", path.display(), e);
                None
            }
        }
    }

    fn backend(&self) -> &'static str {
        "libmagic"
    }
}
