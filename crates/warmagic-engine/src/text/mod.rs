//! Font loading and line measurement.

mod font_system;

pub use font_system::{FALLBACK_ADVANCE_FACTOR, FontId, FontLoadError, FontSystem};
