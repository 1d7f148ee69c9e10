/// Straight-alpha 8-bit RGBA color.
///
/// This layer composites nothing itself, so colors stay in the byte form the
/// backend consumes directly; no premultiplication or colorspace conversion
/// happens here.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent; draws nothing under normal blending.
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const DARK_GRAY: Color = Color::rgb(80, 80, 80);

    // Warmagic palette.
    pub const PURPLE: Color = Color::rgb(200, 122, 255);
    pub const DARK_PURPLE: Color = Color::rgb(112, 31, 126);
}
