//! Warmagic engine crate.
//!
//! This crate owns the renderer-agnostic pieces the widget layer builds on:
//! coordinate types and the design-to-screen transform, colors, the draw
//! command stream, and font measurement. Actual pixel output is the job of
//! whatever backend consumes the recorded [`scene::DrawList`].

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
