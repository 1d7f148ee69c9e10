//! Reusable visual presets applied at widget construction.

use warmagic_engine::paint::Color;

/// Static visual preset: background, border, and text colors for a widget.
///
/// A style is copied into the widget at construction; changing a style later
/// does not restyle widgets already built from it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
    pub background: Color,
    pub border_width: f32,
    pub border_color: Color,
    pub foreground: Color,
}

impl Style {
    /// House style for Warmagic chrome.
    pub const WARMAGIC: Style = Style {
        background: Color::BLACK,
        border_width: 4.0,
        border_color: Color::DARK_PURPLE,
        foreground: Color::PURPLE,
    };

    /// House style without the border, for flush panels and plain labels.
    pub const WARMAGIC_BORDERLESS: Style = Style {
        background: Color::BLACK,
        border_width: 0.0,
        border_color: Color::TRANSPARENT,
        foreground: Color::PURPLE,
    };

    #[inline]
    pub const fn new(
        background: Color,
        border_width: f32,
        border_color: Color,
        foreground: Color,
    ) -> Self {
        Self { background, border_width, border_color, foreground }
    }
}
