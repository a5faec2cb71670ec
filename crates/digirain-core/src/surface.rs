//! The drawing capability the rain engine paints through.

use thiserror::Error;

use crate::Rgb;

/// Failure to paint a single glyph.
///
/// These are per-glyph faults. Callers are expected to log and skip them so
/// that one bad glyph never aborts the rest of a frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    /// The surface has no way to render this character.
    #[error("unsupported glyph {0:?}")]
    UnsupportedGlyph(char),
    /// Non-finite coordinates or opacity.
    #[error("invalid draw parameters at ({x}, {y})")]
    InvalidGeometry { x: f32, y: f32 },
}

/// A 2D pixel surface with alpha compositing.
///
/// Coordinates are in surface pixels with the origin at the top left. Text
/// positions name the glyph baseline, as on an HTML canvas.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> f32;

    /// Surface height in pixels.
    fn height(&self) -> f32;

    /// Composite a solid rectangle of `color` at opacity `alpha`.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb, alpha: f32);

    /// Paint one glyph with its baseline at `(x, y)`.
    ///
    /// Glyphs that fall outside the surface are clipped and still return `Ok`.
    fn draw_glyph(
        &mut self,
        glyph: char,
        x: f32,
        y: f32,
        font_size: f32,
        color: Rgb,
        alpha: f32,
    ) -> Result<(), DrawError>;
}
