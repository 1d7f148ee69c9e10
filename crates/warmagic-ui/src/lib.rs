//! Warmagic UI: immediate-mode widget layer on top of `warmagic-engine`.
//!
//! Widgets are plain value records authored in **design space** (a fixed
//! virtual canvas, 800×600 for Warmagic). Each frame the host fits that
//! canvas into the current window with a `ScreenTransform` and draws either
//! the design-space originals through `Widget::draw_transformed` or a
//! cached `Widget::transformed` projection. The originals are never
//! mutated; screen-space copies are disposable derivations.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use warmagic_ui::prelude::*;
//!
//! let mut scene = Scene::new();
//! scene.insert(Widget::panel(Rect::new(0.0, 0.0, 800.0, 600.0), Style::WARMAGIC_BORDERLESS));
//! scene.insert(Widget::label(
//!     Rect::new(10.0, 10.0, 260.0, 50.0),
//!     "Warmagic", 35.0, Align::CENTER, Style::WARMAGIC,
//! ));
//!
//! // Per frame:
//! let transform = ScreenTransform::fit(window_w, window_h, 800.0, 600.0);
//! let mut painter = Painter::new(&mut draw_list, &fonts, font);
//! scene.draw_transformed(&transform, &mut painter);
//! // Hand draw_list to the backend.
//! ```

pub mod align;
pub mod painter;
pub mod scene;
pub mod style;
pub mod text;
pub mod widget;

/// Common imports for composing Warmagic screens.
pub mod prelude {
    pub use crate::align::{Align, HAlign, VAlign};
    pub use crate::painter::Painter;
    pub use crate::scene::{Scene, WidgetId};
    pub use crate::style::Style;
    pub use crate::text::Text;
    pub use crate::widget::Widget;
    pub use warmagic_engine::coords::{Point, Rect, ScreenTransform, Size};
    pub use warmagic_engine::paint::Color;
    pub use warmagic_engine::scene::DrawList;
    pub use warmagic_engine::text::{FontId, FontSystem};
}
