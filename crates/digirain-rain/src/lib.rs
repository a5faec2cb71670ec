//! Matrix rain engine.
//!
//! A [`Column`] is one falling stream of fading glyphs. A [`Variant`] is a
//! colored row of columns spanning the canvas, and the [`EffectBank`] holds
//! every variant and keeps at most one of them active. Everything paints
//! through the [`digirain_core::Surface`] capability; [`CellCanvas`] is the
//! terminal-backed implementation.

mod bank;
mod canvas;
mod chars;
mod color;
mod column;
mod variant;

#[cfg(test)]
mod testing;

pub use bank::{BankError, DEFAULT_TRAIL_ALPHA, EffectBank};
pub use canvas::CellCanvas;
pub use chars::{GLYPH_COUNT, RAIN_GLYPHS, random_glyph};
pub use column::{Column, FADE_FACTOR, Glyph, PURGE_ALPHA};
pub use variant::Variant;
