//! Draw stream types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands for one frame
//! - preserve insertion order (back-to-front is the order things were pushed)
//!
//! A backend walks [`DrawList::items`] once per frame and issues the matching
//! primitive calls. Nothing here touches a GPU or a window.

mod cmd;
mod list;

pub use cmd::{BorderCmd, DrawCmd, RectCmd, TextCmd};
pub use list::DrawList;
