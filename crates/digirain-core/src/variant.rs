//! Variant parameters.

use serde::{Deserialize, Serialize};

use crate::Rgb;

/// Speed modifier used when a variant does not specify one.
pub const DEFAULT_SPEED: f32 = 1.0;

/// Density used when a variant does not specify one.
///
/// The spawn chance of a column is `1 - density`, so the default gives a
/// one-in-ten chance per update.
pub const DEFAULT_DENSITY: f32 = 0.9;

/// Construction parameters for one named rain variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSpec {
    /// Section name this variant belongs to. Matched case-insensitively.
    pub key: String,
    /// Base paint color for every glyph of the variant.
    pub color: Rgb,
    /// Multiplier applied to each column's randomly drawn speed.
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Controls glyph spawn frequency (higher is sparser).
    #[serde(default = "default_density")]
    pub density: f32,
}

/// Per-update glyph spawn probability for a density, clamped to `0..=1`.
pub fn spawn_chance(density: f32) -> f32 {
    (1.0 - density).clamp(0.0, 1.0)
}

fn default_speed() -> f32 {
    DEFAULT_SPEED
}

fn default_density() -> f32 {
    DEFAULT_DENSITY
}

impl VariantSpec {
    pub fn new(key: impl Into<String>, color: Rgb) -> Self {
        Self {
            key: key.into(),
            color,
            speed: DEFAULT_SPEED,
            density: DEFAULT_DENSITY,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Per-update probability that a column spawns a new glyph.
    pub fn spawn_chance(&self) -> f32 {
        spawn_chance(self.density)
    }

    /// The three variants of the stock menu: enter, about, contact.
    pub fn defaults() -> Vec<VariantSpec> {
        vec![
            VariantSpec::new("enter", Rgb::new(0, 255, 0))
                .with_speed(1.5)
                .with_density(0.95),
            VariantSpec::new("about", Rgb::new(0, 255, 255))
                .with_speed(1.0)
                .with_density(0.85),
            VariantSpec::new("contact", Rgb::new(255, 128, 0))
                .with_speed(0.8)
                .with_density(0.75),
        ]
    }
}
