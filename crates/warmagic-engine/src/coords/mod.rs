//! Coordinate and geometry types shared across the engine and UI layers.
//!
//! Two coordinate spaces exist:
//! - **Design space**: the fixed virtual canvas all widget geometry is
//!   authored in (origin top-left, +X right, +Y down).
//! - **Screen space**: actual window pixels, varying with window size.
//!
//! [`ScreenTransform`] is the only bridge between the two. Nothing in the
//! types themselves distinguishes the spaces; callers track which space a
//! value is currently in.

mod point;
mod rect;
mod size;
mod transform;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
pub use transform::{FONT_SCALE_EXPONENT, ScreenTransform};
