//! # Terminal Width Query (`common::terminal`)
//!
//! File: cli/src/common/terminal.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The type listing lays labels out in columns, which depends on how wide the
//! output device is. Querying that is kept behind [`WidthSource`] so the
//! layout itself (`CompressionTypeRegistry::format`) stays a pure function
//! of the label set and a width.
//!
//! - [`TerminalWidth`]: asks the terminal via `crossterm`, falling back to
//!   [`DEFAULT_WIDTH`] when stdout is not a terminal
//! - [`FixedWidth`]: a constant, for configuration overrides and tests
//!
use tracing::debug;

/// Width assumed when no terminal can be queried.
pub const DEFAULT_WIDTH: usize = 80;

/// Something that knows how many character columns the output has.
pub trait WidthSource {
    fn columns(&self) -> usize;
}

/// Queries the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalWidth;

impl WidthSource for TerminalWidth {
    fn columns(&self) -> usize {
        match crossterm::terminal::size() {
            Ok((cols, _rows)) if cols > 0 => usize::from(cols),
            Ok(_) => DEFAULT_WIDTH,
            Err(e) => {
                debug!("Terminal size unavailable ({}), using {} columns", e, DEFAULT_WIDTH);
                DEFAULT_WIDTH
            }
        }
    }
}

/// A fixed number of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub usize);

impl WidthSource for FixedWidth {
    fn columns(&self) -> usize {
        self.0
    }
}

/// Picks the explicit width when there is one, otherwise the terminal.
pub fn resolve_width(explicit: Option<usize>, fallback: &dyn WidthSource) -> usize {
    explicit.unwrap_or_else(|| fallback.columns())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width() {
        assert_eq!(FixedWidth(132).columns(), 132);
    }

    #[test]
    fn test_terminal_width_is_never_zero() {
        assert!(TerminalWidth.columns() > 0);
    }

    #[test]
    fn test_resolve_width_prefers_explicit() {
        assert_eq!(resolve_width(Some(40), &FixedWidth(100)), 40);
        assert_eq!(resolve_width(None, &FixedWidth(100)), 100);
    }
}
