//! Severity palette: maps a severity to the ANSI style of its label
//!
//! The palette is a lookup table rather than a branch per severity. A severity
//! without an entry falls back to [`Style::PLAIN`], so the lookup is total.

use crate::severity::Severity;
use std::fmt;

/// SGR sequence that clears every attribute set by a [`Style`]
pub const RESET: &str = "\x1b[0m";

/// A presentation hint for a substring, always closed by [`RESET`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    open: &'static str,
}

impl Style {
    pub const PLAIN: Style = Style::new("");
    pub const BOLD: Style = Style::new("\x1b[1m");
    pub const BRIGHT_RED: Style = Style::new("\x1b[91m");
    pub const BRIGHT_GREEN: Style = Style::new("\x1b[92m");
    pub const BRIGHT_YELLOW: Style = Style::new("\x1b[93m");

    /// Style from a raw opening escape sequence (empty for no emphasis)
    pub const fn new(open: &'static str) -> Self {
        Self { open }
    }

    pub const fn open(&self) -> &'static str {
        self.open
    }

    pub const fn is_plain(&self) -> bool {
        self.open.is_empty()
    }

    /// Wrap `text` so it is written as `open + text + reset`
    pub fn paint<T: fmt::Display>(
        self,
        text: T,
    ) -> Painted<T> {
        Painted { style: self, text }
    }
}

/// Display adapter returned by [`Style::paint`]
#[derive(Debug, Clone, Copy)]
pub struct Painted<T> {
    style: Style,
    text: T,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.style.is_plain() {
            return write!(f, "{}", self.text);
        }
        write!(f, "{}{}{}", self.style.open, self.text, RESET)
    }
}

const ANSI_ENTRIES: &[(Severity, Style)] = &[
    (Severity::Info, Style::BRIGHT_GREEN),
    (Severity::Warn, Style::BRIGHT_YELLOW),
    (Severity::Error, Style::BRIGHT_RED),
];

/// Table of severity styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    entries: &'static [(Severity, Style)],
}

impl Palette {
    /// Palette over an explicit table; severities missing from it render plain
    pub const fn new(entries: &'static [(Severity, Style)]) -> Self {
        Self { entries }
    }

    /// Green info, yellow warn, red error, everything else plain
    pub const fn ansi() -> Self {
        Self::new(ANSI_ENTRIES)
    }

    /// No emphasis for any severity
    pub const fn plain() -> Self {
        Self::new(&[])
    }

    pub fn style_for(
        &self,
        severity: Severity,
    ) -> Style {
        self.entries
            .iter()
            .find(|(s, _)| *s == severity)
            .map(|(_, style)| *style)
            .unwrap_or(Style::PLAIN)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::ansi()
    }
}
