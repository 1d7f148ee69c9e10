//! Text alignment within a widget rect.

/// Horizontal placement of a text block inside a rect.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum HAlign {
    #[default]
    Center,
    Left,
    Right,
}

/// Vertical placement of a text block inside a rect.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum VAlign {
    #[default]
    Center,
    Top,
    Bottom,
}

/// Alignment spec: anchor plus per-edge margins.
///
/// Margins only apply on the edge the text is anchored to; a centered axis
/// ignores both of its margins.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Align {
    pub h: HAlign,
    pub v: VAlign,
    pub left_margin: f32,
    pub top_margin: f32,
    pub right_margin: f32,
    pub bottom_margin: f32,
}

impl Align {
    /// Centered on both axes, no margins.
    pub const CENTER: Align = Align {
        h: HAlign::Center,
        v: VAlign::Center,
        left_margin: 0.0,
        top_margin: 0.0,
        right_margin: 0.0,
        bottom_margin: 0.0,
    };

    #[inline]
    pub const fn new(h: HAlign, v: VAlign) -> Self {
        Align {
            h,
            v,
            left_margin: 0.0,
            top_margin: 0.0,
            right_margin: 0.0,
            bottom_margin: 0.0,
        }
    }

    pub fn left_margin(mut self, v: f32) -> Self {
        self.left_margin = v;
        self
    }

    pub fn top_margin(mut self, v: f32) -> Self {
        self.top_margin = v;
        self
    }

    pub fn right_margin(mut self, v: f32) -> Self {
        self.right_margin = v;
        self
    }

    pub fn bottom_margin(mut self, v: f32) -> Self {
        self.bottom_margin = v;
        self
    }
}
