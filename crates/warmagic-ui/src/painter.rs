//! High-level drawing surface for widgets.

use warmagic_engine::coords::{Point, Rect};
use warmagic_engine::paint::Color;
use warmagic_engine::scene::DrawList;
use warmagic_engine::text::{FontId, FontSystem};

use crate::align::{Align, HAlign, VAlign};
use crate::text::Text;

/// Corner radius of borders, as a fraction of the rect's shorter side.
/// Warmagic chrome draws slightly rounded frames.
const BORDER_ROUNDNESS: f32 = 0.1;

/// Drawing surface passed to widget draw calls.
///
/// Wraps the engine's [`DrawList`] with the widget-level operations (fill,
/// border, aligned multi-line text) and carries the font used for
/// measurement and drawing. Coordinates pass straight through: the painter
/// draws in whatever space the rects it is handed are in.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    fonts: &'a FontSystem,
    font: FontId,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, fonts: &'a FontSystem, font: FontId) -> Self {
        Self { draw_list, fonts, font }
    }

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push_rect(rect, color);
    }

    /// Rounded rectangle outline. A non-positive `width` draws nothing.
    pub fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        if width <= 0.0 {
            return;
        }
        let size = rect.size();
        let radius = BORDER_ROUNDNESS * size.w.min(size.h).max(0.0);
        self.draw_list.push_border(rect, width, radius, color);
    }

    /// Draws a multi-line text block aligned within `rect`.
    ///
    /// The block is measured as-is: alignment happens in the coordinate
    /// space `rect` is currently expressed in, so a pre-scaled text block
    /// pairs with a pre-scaled rect. Lines are emitted top to bottom at a
    /// constant pitch of `size + spacing`. Empty content or a non-positive
    /// font size draws nothing.
    pub fn draw_text_aligned(&mut self, rect: Rect, text: &Text, align: Align) {
        if text.content.is_empty() || text.size <= 0.0 {
            return;
        }

        let spacing = text.spacing();
        let measured = text.measure(self.fonts, self.font);
        let center = rect.center();

        let x = match align.h {
            HAlign::Center => center.x - measured.w * 0.5,
            HAlign::Left => rect.left + align.left_margin,
            HAlign::Right => rect.right - measured.w - align.right_margin,
        };
        let mut y = match align.v {
            VAlign::Center => center.y - measured.h * 0.5,
            VAlign::Top => rect.top + align.top_margin,
            VAlign::Bottom => rect.bottom - measured.h - align.bottom_margin,
        };

        for line in text.content.lines() {
            self.draw_list.push_text(
                line,
                self.font,
                text.size,
                spacing,
                text.color,
                Point::new(x, y),
            );
            y += text.size + spacing;
        }
    }
}
