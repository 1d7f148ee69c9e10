use super::{Point, Rect};

/// Empirical exponent applied to the uniform scale when deriving font sizes.
///
/// Glyphs scaled linearly with the canvas read as too light at small window
/// sizes, so font sizes scale by `scale^1.2` instead of `scale`. The value is
/// a tuned visual correction, not derived from anything; change it only with
/// art direction sign-off.
pub const FONT_SCALE_EXPONENT: f32 = 1.2;

/// Mapping from design space to screen space.
///
/// Positions map as `screen = design * scale + offset` per axis. The scale is
/// uniform (aspect ratio is preserved, never stretched) and the offsets
/// center the scaled canvas inside the window, producing letterbox or
/// pillarbox bars on the longer window axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenTransform {
    pub x_offset: f32,
    pub y_offset: f32,
    pub scale: f32,
}

impl ScreenTransform {
    /// No-op transform: screen space and design space coincide.
    pub const IDENTITY: ScreenTransform = ScreenTransform {
        x_offset: 0.0,
        y_offset: 0.0,
        scale: 1.0,
    };

    /// Computes the transform that fits a `design_w × design_h` canvas inside
    /// a `window_w × window_h` window.
    ///
    /// Pure and cheap; the host calls this every time the window is resized
    /// (calling it every frame is also fine). Taking the smaller of the two
    /// axis ratios means the scaled canvas always fits: offsets are never
    /// negative, and the axis with slack gets the bars.
    pub fn fit(window_w: f32, window_h: f32, design_w: f32, design_h: f32) -> Self {
        let scale = (window_w / design_w).min(window_h / design_h);
        Self {
            x_offset: (window_w - design_w * scale) * 0.5,
            y_offset: (window_h - design_h * scale) * 0.5,
            scale,
        }
    }

    #[inline]
    pub fn apply_point(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale + self.x_offset,
            p.y * self.scale + self.y_offset,
        )
    }

    /// Transforms all four edges: each scales, then receives its axis offset.
    #[inline]
    pub fn apply_rect(&self, r: Rect) -> Rect {
        Rect::new(
            r.left * self.scale + self.x_offset,
            r.top * self.scale + self.y_offset,
            r.right * self.scale + self.x_offset,
            r.bottom * self.scale + self.y_offset,
        )
    }

    /// Scales a length (border widths, margins). No offset applies.
    #[inline]
    pub fn apply_length(&self, len: f32) -> f32 {
        len * self.scale
    }

    /// Scale factor for font sizes, with the [`FONT_SCALE_EXPONENT`]
    /// correction applied.
    #[inline]
    pub fn font_scale(&self) -> f32 {
        self.scale.powf(FONT_SCALE_EXPONENT)
    }

    /// Maps a screen-space point back into design space.
    ///
    /// Inverse of [`apply_point`](Self::apply_point); used to route pointer
    /// positions back to design-space widget rects.
    #[inline]
    pub fn unapply_point(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.x_offset) / self.scale,
            (p.y - self.y_offset) / self.scale,
        )
    }
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
