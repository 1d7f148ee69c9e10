//! Widget records and the transform-then-draw pipeline.

use warmagic_engine::coords::{Rect, ScreenTransform};
use warmagic_engine::paint::Color;

use crate::align::Align;
use crate::painter::Painter;
use crate::style::Style;
use crate::text::Text;

/// Shared portion of every widget: rect plus background and border.
#[derive(Debug, Clone, PartialEq)]
pub struct Base {
    pub rect: Rect,
    pub background: Color,
    pub border_width: f32,
    pub border_color: Color,
}

impl Base {
    pub fn new(rect: Rect, style: Style) -> Self {
        Self {
            rect,
            background: style.background,
            border_width: style.border_width,
            border_color: style.border_color,
        }
    }

    /// Derived screen-space copy; `self` stays in design space.
    #[must_use]
    pub fn transformed(&self, transform: &ScreenTransform) -> Self {
        Self {
            rect: transform.apply_rect(self.rect),
            background: self.background,
            border_width: transform.apply_length(self.border_width),
            border_color: self.border_color,
        }
    }

    /// Background fill, skipped for degenerate rects, then the border.
    /// A zero-area panel still shows its border and text.
    fn draw(&self, painter: &mut Painter) {
        if self.rect.has_area() {
            painter.fill_rect(self.rect, self.background);
        }
        painter.stroke_rect(self.rect, self.border_width, self.border_color);
    }
}

/// Plain rectangle with background and border, no content.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub base: Base,
}

/// Static text in a rect.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub base: Base,
    pub text: Text,
    pub align: Align,
}

/// A pressable rect with a caption. Press handling lives with the host;
/// this layer only describes and draws the button.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub base: Base,
    pub text: Text,
    pub align: Align,
}

/// A button carrying an on/off state.
///
/// `toggled` is data-only here: the draw contract is identical to
/// [`Button`], and any visual differentiation is the caller's styling
/// decision.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleButton {
    pub base: Base,
    pub text: Text,
    pub align: Align,
    pub toggled: bool,
}

/// A drawable UI primitive. Behavior dispatches on the variant tag; all
/// variants share the [`Base`] geometry and chrome.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Panel(Panel),
    Label(Label),
    Button(Button),
    ToggleButton(ToggleButton),
}

impl Widget {
    pub fn panel(rect: Rect, style: Style) -> Self {
        Widget::Panel(Panel { base: Base::new(rect, style) })
    }

    pub fn label(
        rect: Rect,
        content: impl Into<String>,
        size: f32,
        align: Align,
        style: Style,
    ) -> Self {
        Widget::Label(Label {
            base: Base::new(rect, style),
            text: Text::new(content, size, style.foreground),
            align,
        })
    }

    pub fn button(
        rect: Rect,
        content: impl Into<String>,
        size: f32,
        align: Align,
        style: Style,
    ) -> Self {
        Widget::Button(Button {
            base: Base::new(rect, style),
            text: Text::new(content, size, style.foreground),
            align,
        })
    }

    pub fn toggle_button(
        rect: Rect,
        content: impl Into<String>,
        size: f32,
        align: Align,
        style: Style,
        toggled: bool,
    ) -> Self {
        Widget::ToggleButton(ToggleButton {
            base: Base::new(rect, style),
            text: Text::new(content, size, style.foreground),
            align,
            toggled,
        })
    }

    #[inline]
    pub fn base(&self) -> &Base {
        match self {
            Widget::Panel(p) => &p.base,
            Widget::Label(l) => &l.base,
            Widget::Button(b) => &b.base,
            Widget::ToggleButton(t) => &t.base,
        }
    }

    /// The widget's rect in whatever space the widget is currently in.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.base().rect
    }

    /// Text block and alignment for text-bearing variants.
    #[inline]
    pub fn text(&self) -> Option<(&Text, Align)> {
        match self {
            Widget::Panel(_) => None,
            Widget::Label(l) => Some((&l.text, l.align)),
            Widget::Button(b) => Some((&b.text, b.align)),
            Widget::ToggleButton(t) => Some((&t.text, t.align)),
        }
    }

    /// Derived screen-space projection of this widget.
    ///
    /// Rect edges and border width scale with the canvas; the font size
    /// scales with the corrected font factor. `self` is untouched; it stays
    /// the design-space source of truth, and the returned copy is disposable
    /// (cache it between resizes or rebuild it per frame, either works).
    #[must_use]
    pub fn transformed(&self, transform: &ScreenTransform) -> Widget {
        match self {
            Widget::Panel(p) => Widget::Panel(Panel { base: p.base.transformed(transform) }),
            Widget::Label(l) => Widget::Label(Label {
                base: l.base.transformed(transform),
                text: l.text.scaled(transform),
                align: l.align,
            }),
            Widget::Button(b) => Widget::Button(Button {
                base: b.base.transformed(transform),
                text: b.text.scaled(transform),
                align: b.align,
            }),
            Widget::ToggleButton(t) => Widget::ToggleButton(ToggleButton {
                base: t.base.transformed(transform),
                text: t.text.scaled(transform),
                align: t.align,
                toggled: t.toggled,
            }),
        }
    }

    /// Draws the widget in its current coordinate space.
    ///
    /// Background fill is skipped for zero- or negative-area rects, the
    /// border only draws for a positive width, and text only draws when
    /// present and non-degenerate. Text aligns against the rect as it is
    /// now, never re-derived from design space.
    pub fn draw(&self, painter: &mut Painter) {
        self.base().draw(painter);
        if let Some((text, align)) = self.text() {
            painter.draw_text_aligned(self.base().rect, text, align);
        }
    }

    /// Per-frame entry point: draws a transformed copy, leaving `self` in
    /// design space.
    pub fn draw_transformed(&self, transform: &ScreenTransform, painter: &mut Painter) {
        self.transformed(transform).draw(painter);
    }
}
