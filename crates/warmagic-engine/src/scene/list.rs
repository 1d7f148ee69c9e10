use crate::coords::{Point, Rect};
use crate::paint::Color;
use crate::text::FontId;

use super::{BorderCmd, DrawCmd, RectCmd, TextCmd};

/// Recorded draw stream for a frame.
///
/// Commands draw in the order they were pushed; there is no z-sorting.
/// `push()` is O(1) and [`clear`](Self::clear) keeps allocated capacity, so a
/// host can reuse one list across frames without reallocating.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Commands in draw (insertion) order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Records a filled rectangle.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCmd::Rect(RectCmd { rect, color }));
    }

    /// Records a rectangle outline.
    #[inline]
    pub fn push_border(&mut self, rect: Rect, width: f32, corner_radius: f32, color: Color) {
        self.push(DrawCmd::Border(BorderCmd { rect, width, corner_radius, color }));
    }

    /// Records one text line.
    #[inline]
    pub fn push_text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        spacing: f32,
        color: Color,
        origin: Point,
    ) {
        self.push(DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            spacing,
            color,
            origin,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_keep_insertion_order() {
        let mut list = DrawList::new();
        list.push_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        list.push_border(Rect::new(0.0, 0.0, 1.0, 1.0), 2.0, 0.0, Color::WHITE);
        list.push_text("hi", FontId::FALLBACK, 10.0, 1.0, Color::WHITE, Point::zero());

        let kinds: Vec<_> = list
            .items()
            .iter()
            .map(|c| match c {
                DrawCmd::Rect(_) => "rect",
                DrawCmd::Border(_) => "border",
                DrawCmd::Text(_) => "text",
            })
            .collect();
        assert_eq!(kinds, ["rect", "border", "text"]);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = DrawList::new();
        list.push_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        assert_eq!(list.len(), 1);
        list.clear();
        assert!(list.is_empty());
    }
}
