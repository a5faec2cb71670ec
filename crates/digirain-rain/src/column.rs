//! A single falling glyph stream.

use std::collections::VecDeque;

use digirain_core::{DEFAULT_DENSITY, Rgb, Surface, spawn_chance};
use rand::Rng;

use crate::chars::random_glyph;

/// Alpha multiplier applied to every glyph on each update.
pub const FADE_FACTOR: f32 = 0.95;

/// Glyphs at or below this alpha are dropped.
pub const PURGE_ALPHA: f32 = 0.1;

/// Lower bound of a column's randomly drawn speed, in pixels per update.
const MIN_SPEED: f32 = 1.0;
/// Width of the speed range, so speeds land in `[1, 3)`.
const SPEED_SPREAD: f32 = 2.0;

/// Lower bound of a column's glyph capacity.
const MIN_LENGTH: usize = 5;
/// Width of the capacity range, so lengths land in `[5, 30)`.
const LENGTH_SPREAD: usize = 25;

/// One displayed character and its current opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub alpha: f32,
}

/// State for a single rain column.
#[derive(Debug, Clone)]
pub struct Column {
    /// Fixed horizontal position.
    x: f32,
    /// Head position; glyphs trail upward from here.
    y: f32,
    /// Row stride and glyph size.
    font_size: f32,
    /// Pixels advanced per update.
    speed: f32,
    /// Maximum glyphs held at once.
    max_length: usize,
    /// Probability of spawning a glyph on an update.
    spawn_chance: f32,
    /// Head-first glyph trail.
    chars: VecDeque<Glyph>,
}

impl Column {
    /// Create a column with randomly drawn position, speed and capacity.
    ///
    /// `speed_scale` and `density` come from the owning variant.
    pub fn new<R: Rng + ?Sized>(
        x: f32,
        font_size: f32,
        canvas_height: f32,
        speed_scale: f32,
        density: f32,
        rng: &mut R,
    ) -> Self {
        let y = rng.r#gen::<f32>() * canvas_height.max(0.0);
        let speed = (rng.r#gen::<f32>() * SPEED_SPREAD + MIN_SPEED) * speed_scale;
        let max_length = (rng.r#gen::<f32>() * LENGTH_SPREAD as f32) as usize + MIN_LENGTH;

        Self::with_state(x, font_size, y, speed, max_length.min(MIN_LENGTH + LENGTH_SPREAD - 1))
            .with_density(density)
    }

    /// Create a column with explicit state and the default density.
    pub fn with_state(x: f32, font_size: f32, y: f32, speed: f32, max_length: usize) -> Self {
        Self {
            x,
            y,
            font_size,
            speed,
            max_length,
            spawn_chance: spawn_chance(DEFAULT_DENSITY),
            chars: VecDeque::with_capacity(max_length),
        }
    }

    /// Replace the spawn chance with the one `density` maps to.
    pub fn with_density(mut self, density: f32) -> Self {
        self.spawn_chance = spawn_chance(density);
        self
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn spawn_chance(&self) -> f32 {
        self.spawn_chance
    }

    /// The glyph trail, newest first.
    pub fn chars(&self) -> &VecDeque<Glyph> {
        &self.chars
    }

    /// Advance the column by one frame.
    pub fn update<R: Rng + ?Sized>(&mut self, canvas_height: f32, rng: &mut R) {
        // Roll first so the random stream does not depend on trail length.
        let roll = rng.r#gen::<f32>();
        if roll < self.spawn_chance && self.chars.len() < self.max_length {
            self.chars.push_front(Glyph {
                ch: random_glyph(rng),
                alpha: 1.0,
            });
        }

        self.y += self.speed;
        if self.y > canvas_height {
            self.y = 0.0;
            self.chars.clear();
        }

        for glyph in &mut self.chars {
            glyph.alpha *= FADE_FACTOR;
        }
        self.chars.retain(|glyph| glyph.alpha > PURGE_ALPHA);
    }

    /// Paint the trail, each glyph one row above the previous one.
    ///
    /// Returns the number of glyphs the surface refused.
    pub fn draw(&self, surface: &mut dyn Surface, color: Rgb) -> usize {
        let mut failed = 0;
        for (i, glyph) in self.chars.iter().enumerate() {
            let y = self.y - i as f32 * self.font_size;
            if let Err(err) =
                surface.draw_glyph(glyph.ch, self.x, y, self.font_size, color, glyph.alpha)
            {
                failed += 1;
                tracing::trace!(x = self.x, y, %err, "skipping glyph");
            }
        }
        failed
    }
}
