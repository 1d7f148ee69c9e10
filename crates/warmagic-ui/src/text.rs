//! Multi-line text blocks.

use warmagic_engine::coords::{ScreenTransform, Size};
use warmagic_engine::paint::Color;
use warmagic_engine::text::{FontId, FontSystem};

/// Gap between characters and between lines, as a fraction of the font size.
pub const LINE_SPACING_FACTOR: f32 = 0.1;

/// A text block carried by a widget.
///
/// Embedded `\n` characters separate lines; each line is measured and drawn
/// independently. The block owns its content, so transforming a widget never
/// aliases caller-held buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    /// Font size; positive for visible text.
    pub size: f32,
    pub color: Color,
}

impl Text {
    #[inline]
    pub fn new(content: impl Into<String>, size: f32, color: Color) -> Self {
        Self { content: content.into(), size, color }
    }

    /// Inter-character and inter-line spacing at this block's font size.
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.size * LINE_SPACING_FACTOR
    }

    /// Derived copy with the font size scaled for screen space.
    ///
    /// Uses [`ScreenTransform::font_scale`], which carries the empirical
    /// glyph-weight correction exponent rather than the plain canvas scale.
    #[must_use]
    pub fn scaled(&self, transform: &ScreenTransform) -> Self {
        Self {
            content: self.content.clone(),
            size: self.size * transform.font_scale(),
            color: self.color,
        }
    }

    /// Bounding size of the whole block.
    ///
    /// Width is the widest line; height is one font size per line plus
    /// spacing between lines (no trailing spacing). Every `\n` delimits a
    /// line, so consecutive breaks produce blank rows that keep their full
    /// pitch; authors rely on `"\n\n"` for paragraph gaps. Empty content or
    /// a non-positive size measures [`Size::ZERO`]; such a block draws
    /// nothing, it does not error.
    #[must_use]
    pub fn measure(&self, fonts: &FontSystem, font: FontId) -> Size {
        if self.content.is_empty() || self.size <= 0.0 {
            return Size::ZERO;
        }

        let spacing = self.spacing();
        let mut total = Size::ZERO;
        for line in self.content.lines() {
            let line_size = fonts.measure_line(line, font, self.size, spacing);
            total.w = total.w.max(line_size.w);
            total.h += line_size.h + spacing;
        }
        total.h -= spacing;
        total
    }
}
