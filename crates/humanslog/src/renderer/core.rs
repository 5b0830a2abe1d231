//! Renderer struct and constructors

use crate::palette::{
    Palette,
    Style,
};

/// Timestamp layout of the header, e.g. `3:04PM`
pub(super) const KITCHEN: &str = "%-I:%M%p";

/// Converts [`LogEvent`](crate::LogEvent)s to text.
///
/// Holds only presentation settings; every call to
/// [`render`](Renderer::render) is independent of the previous ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    pub(super) palette: Palette,
    pub(super) emphasis: Style,
}

impl Renderer {
    /// Renderer with a custom palette and message emphasis
    pub const fn new(
        palette: Palette,
        emphasis: Style,
    ) -> Self {
        Self { palette, emphasis }
    }

    /// Colored severity and bold message
    pub const fn ansi() -> Self {
        Self::new(Palette::ansi(), Style::BOLD)
    }

    /// Same layout without any escape sequences
    pub const fn plain() -> Self {
        Self::new(Palette::plain(), Style::PLAIN)
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::ansi()
    }
}
