use std::fmt;

use crate::coords::Size;

/// Per-character advance used when a [`FontId`] resolves to no loaded font,
/// as a fraction of the font size. Keeps measurement total and deterministic
/// in headless runs (tests, servers) where no font file is available.
pub const FALLBACK_ADVANCE_FACTOR: f32 = 0.6;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(usize);

impl FontId {
    /// A handle that never resolves to a loaded font. Measurement against it
    /// uses the fallback metric; backends substitute their built-in font.
    pub const FALLBACK: FontId = FontId(usize::MAX);
}

/// Owns a collection of loaded fonts and answers line-measurement queries.
///
/// Fonts are immutable after loading. The system is owned by the host and
/// shared (by reference) with the widget layer for layout and with the
/// backend for rasterization.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Measures one line of text.
    ///
    /// `text` must not contain line breaks; multi-line blocks are split and
    /// accumulated by the widget layer. Width is the sum of glyph advances
    /// plus `spacing` between consecutive characters; height is `size` (one
    /// line is exactly one font size tall in this layer's metric).
    ///
    /// Total over all inputs: empty text or non-positive `size` measures
    /// zero wide, and an unresolved `id` falls back to
    /// [`FALLBACK_ADVANCE_FACTOR`] per character.
    #[must_use]
    pub fn measure_line(&self, text: &str, id: FontId, size: f32, spacing: f32) -> Size {
        if size <= 0.0 {
            return Size::ZERO;
        }

        let count = text.chars().count();
        if count == 0 {
            return Size::new(0.0, size);
        }

        let advance_sum = match self.get(id) {
            Some(font) => text
                .chars()
                .map(|c| font.metrics(c, size).advance_width)
                .sum::<f32>(),
            None => size * FALLBACK_ADVANCE_FACTOR * count as f32,
        };

        let w = advance_sum + spacing * (count - 1) as f32;
        Size::new(w, size)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // No font file ships with the repo, so these exercise the fallback
    // metric; glyph-accurate widths are covered by whichever host loads a
    // real face.

    #[test]
    fn fallback_width_scales_with_char_count() {
        let fonts = FontSystem::new();
        let one = fonts.measure_line("A", FontId::FALLBACK, 10.0, 1.0);
        let two = fonts.measure_line("BB", FontId::FALLBACK, 10.0, 1.0);
        assert_eq!(one.w, 6.0);
        assert_eq!(two.w, 13.0); // two advances plus one inter-char spacing
        assert!(two.w > one.w);
    }

    #[test]
    fn line_height_equals_font_size() {
        let fonts = FontSystem::new();
        let s = fonts.measure_line("hello", FontId::FALLBACK, 24.0, 2.4);
        assert_eq!(s.h, 24.0);
    }

    #[test]
    fn empty_line_is_zero_wide_but_one_line_tall() {
        let fonts = FontSystem::new();
        let s = fonts.measure_line("", FontId::FALLBACK, 10.0, 1.0);
        assert_eq!(s, Size::new(0.0, 10.0));
    }

    #[test]
    fn non_positive_size_measures_nothing() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.measure_line("abc", FontId::FALLBACK, 0.0, 0.0), Size::ZERO);
        assert_eq!(fonts.measure_line("abc", FontId::FALLBACK, -5.0, 0.0), Size::ZERO);
    }

    #[test]
    fn load_rejects_garbage_bytes() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(&[0x00, 0x01, 0x02]).is_err());
    }
}
