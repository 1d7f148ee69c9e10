use crate::coords::{Point, Rect};
use crate::paint::Color;
use crate::text::FontId;

/// Filled rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

/// Rectangle outline payload.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderCmd {
    pub rect: Rect,
    /// Stroke width in the rect's own coordinate space.
    pub width: f32,
    /// Corner radius in pixels; `0.0` draws sharp corners.
    pub corner_radius: f32,
    pub color: Color,
}

/// Single laid-out text line. Multi-line splitting happens above this seam;
/// by the time a command lands here it contains no line breaks.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in the line's own coordinate space.
    pub size: f32,
    /// Extra advance inserted between consecutive characters.
    pub spacing: f32,
    pub color: Color,
    /// Top-left of the line.
    pub origin: Point,
}

/// Renderer-agnostic draw command.
///
/// Extending the stream means adding a variant here, a push helper on
/// `DrawList`, and a matching case in each backend.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Border(BorderCmd),
    Text(TextCmd),
}
