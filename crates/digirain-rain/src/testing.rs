//! Recording surface for headless tests.

use digirain_core::{DrawError, Rgb, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFill {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Rgb,
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedGlyph {
    pub ch: char,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub color: Rgb,
    pub alpha: f32,
}

/// A [`Surface`] that remembers every call instead of painting.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    calls: usize,
    glyph_attempts: usize,
    fail_on: Option<usize>,
    pub fills: Vec<RecordedFill>,
    pub glyphs: Vec<RecordedGlyph>,
    /// Call index of the first glyph draw.
    pub first_glyph_call: Option<usize>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Reject the `n`th glyph draw (zero-based).
    pub fn failing_on(mut self, n: usize) -> Self {
        self.fail_on = Some(n);
        self
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb, alpha: f32) {
        self.calls += 1;
        self.fills.push(RecordedFill {
            x,
            y,
            w,
            h,
            color,
            alpha,
        });
    }

    fn draw_glyph(
        &mut self,
        ch: char,
        x: f32,
        y: f32,
        font_size: f32,
        color: Rgb,
        alpha: f32,
    ) -> Result<(), DrawError> {
        let call = self.calls;
        self.calls += 1;
        self.first_glyph_call.get_or_insert(call);

        let attempt = self.glyph_attempts;
        self.glyph_attempts += 1;
        if self.fail_on == Some(attempt) {
            return Err(DrawError::UnsupportedGlyph(ch));
        }

        self.glyphs.push(RecordedGlyph {
            ch,
            x,
            y,
            font_size,
            color,
            alpha,
        });
        Ok(())
    }
}
