//! # Compressed-Type Registry (`classifier::registry`)
//!
//! File: cli/src/classifier/registry.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The registry is the set of content-type labels treated as "already
//! compressed". It starts from a fixed baseline catalog and is changed only
//! through semicolon-delimited add/remove lists.
//!
//! Additions and removals normalize their tokens (trim + lowercase), while
//! [`CompressionTypeRegistry::contains`] performs an exact, case-sensitive
//! lookup. Sniffers are expected to report labels that are already lowercase
//! `type/subtype`, so the lookup side stays untouched.
//!
//! ## Listing Layout
//!
//! [`CompressionTypeRegistry::format`] renders the sorted labels in columns:
//!
//! ```text
//!   application/ogg     application/pdf     audio/mp4
//!   audio/mpeg          image/gif           image/png
//! ```
//!
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// Labels seeded into every freshly constructed registry.
pub const BASELINE_CATALOG: &[&str] = &[
    "audio/mp4",
    "audio/mpeg",
    "audio/x-pn-realaudio",
    "audio/x-mod",
    "audio/x-flac",
    "audio/x-musepack",
    "audio/x-ape",
    "audio/x-wavpack",
    "audio/x-wavpack-correction",
    "application/x-7z-compressed",
    "application/ogg",
    "application/pdf",
    "application/vnd.rn-realmedia",
    "application/x-arc",
    "application/x-arj",
    "application/x-bzip2",
    "application/x-bzip",
    "application/x-bzip-compressed-tar",
    "application/x-compress",
    "application/x-compress-tar",
    "application/x-cpio",
    "application/x-debian-package",
    "application/x-deb",
    "application/x-gzip",
    "application/x-lharc",
    "application/x-lzma",
    "application/x-lzma-compressed-tar",
    "application/x-quicktime",
    "application/x-rar",
    "application/x-rpm",
    "application/x-shockwave-flash",
    "application/x-xz",
    "application/x-zip",
    "application/x-zoo",
    "image/gif",
    "image/jpeg",
    "image/jp2",
    "image/png",
    "image/x-quicktime",
    "video/3gpp",
    "video/mp4",
    "video/mp4v-es",
    "video/mpeg",
    "video/mp2t",
    "video/mpv",
    "video/quicktime",
    "video/x-msvideo",
    "video/x-ms-asf",
    "video/x-ms-wmv",
    "video/x-matroska",
    "video/x-flv",
];

/// Characters of padding added after the longest label in the listing.
const COLUMN_GAP: usize = 5;
/// Indentation at the start of every listing line.
const LINE_INDENT: &str = "  ";

/// A normalized content-type label: trimmed, lowercase, never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeLabel(String);

impl TypeLabel {
    /// Normalizes a raw token. Returns `None` for tokens that are empty after trimming.
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TypeLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits a `;`-delimited list into normalized labels, skipping empty tokens.
fn tokenize(list: &str) -> impl Iterator<Item = TypeLabel> + '_ {
    list.split(';').filter_map(TypeLabel::normalize)
}

/// # Compression Type Registry (`CompressionTypeRegistry`)
///
/// Ordered set of [`TypeLabel`]s considered already compressed. Iteration is
/// lexicographic, so listings are stable for fixed contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionTypeRegistry {
    labels: BTreeSet<TypeLabel>,
}

impl Default for CompressionTypeRegistry {
    fn default() -> Self {
        Self::with_baseline()
    }
}

impl CompressionTypeRegistry {
    /// A registry holding exactly [`BASELINE_CATALOG`].
    pub fn with_baseline() -> Self {
        Self {
            labels: BASELINE_CATALOG
                .iter()
                .filter_map(|label| TypeLabel::normalize(label))
                .collect(),
        }
    }

    /// A registry with no labels at all.
    pub fn empty() -> Self {
        Self {
            labels: BTreeSet::new(),
        }
    }

    /// Inserts every label from a `;`-delimited list. Duplicates are ignored.
    pub fn add(&mut self, list: &str) {
        self.labels.extend(tokenize(list));
    }

    /// Removes every label from a `;`-delimited list. Absent labels are ignored.
    pub fn remove(&mut self, list: &str) {
        for label in tokenize(list) {
            self.labels.remove(&label);
        }
    }

    /// Exact membership test. The label is *not* normalized.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeLabel> {
        self.labels.iter()
    }

    /// # Format Listing (`format`)
    ///
    /// Renders the labels in aligned columns for a display `target_width`
    /// characters wide. Every cell is padded to `longest label + 5`, each line
    /// starts with two spaces and ends with a newline.
    ///
    /// ## Arguments
    ///
    /// * `target_width` - Width of the output device in columns.
    ///
    /// ## Returns
    ///
    /// * `String` - The listing; empty when the registry is empty.
    pub fn format(&self, target_width: usize) -> String {
        let max_len = self
            .labels
            .iter()
            .map(|l| l.as_str().chars().count())
            .max()
            .unwrap_or(0);
        let cell = max_len + COLUMN_GAP;
        let columns = columns_for(target_width, max_len);

        let mut out = String::new();
        for (idx, label) in self.labels.iter().enumerate() {
            if idx % columns == 0 {
                out.push_str(LINE_INDENT);
            }
            out.push_str(&format!("{:<width$}", label.as_str(), width = cell));
            if (idx + 1) % columns == 0 {
                out.push('\n');
            }
        }
        if self.labels.len() % columns != 0 {
            out.push('\n');
        }
        out
    }
}

/// Number of listing columns that fit into `target_width` when the longest
/// label is `max_len` characters: `max(1, (target_width - 2) / (max_len + 5))`.
pub fn columns_for(target_width: usize, max_len: usize) -> usize {
    (target_width.saturating_sub(LINE_INDENT.len()) / (max_len + COLUMN_GAP)).max(1)
}
