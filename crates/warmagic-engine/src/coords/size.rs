/// Width/height pair. Non-negative in valid usage; nothing enforces it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const ZERO: Size = Size { w: 0.0, h: 0.0 };

    #[inline]
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    /// True when both dimensions are strictly positive.
    #[inline]
    pub fn has_area(self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.w.is_finite() && self.h.is_finite()
    }
}
