//! A named, colored set of columns spanning the canvas.

use digirain_core::{Rgb, Surface, VariantSpec};
use rand::Rng;

use crate::column::Column;

/// One rain variant: a color, pacing, and a full row of columns.
#[derive(Debug, Clone)]
pub struct Variant {
    spec: VariantSpec,
    font_size: f32,
    active: bool,
    columns: Vec<Column>,
}

impl Variant {
    /// Create an inactive variant laid out for a `width` x `height` canvas.
    pub fn new<R: Rng + ?Sized>(
        spec: VariantSpec,
        font_size: f32,
        width: f32,
        height: f32,
        rng: &mut R,
    ) -> Self {
        let mut variant = Self {
            spec,
            font_size,
            active: false,
            columns: Vec::new(),
        };
        variant.initialize(width, height, rng);
        variant
    }

    /// Rebuild the columns from scratch, one per `font_size` stride.
    pub fn initialize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        let count = column_count(width, self.font_size);
        let (speed, density) = (self.spec.speed, self.spec.density);
        self.columns = (0..count)
            .map(|i| {
                let x = i as f32 * self.font_size;
                Column::new(x, self.font_size, height, speed, density, rng)
            })
            .collect();
    }

    /// Update and draw every column if this variant is active.
    ///
    /// Returns how many glyphs the surface refused this frame.
    pub fn tick<R: Rng + ?Sized>(&mut self, surface: &mut dyn Surface, rng: &mut R) -> usize {
        if !self.active {
            return 0;
        }

        let height = surface.height();
        let color = self.spec.color;
        let mut failed = 0;
        for column in &mut self.columns {
            column.update(height, rng);
            failed += column.draw(surface, color);
        }
        failed
    }

    pub fn key(&self) -> &str {
        &self.spec.key
    }

    pub fn color(&self) -> Rgb {
        self.spec.color
    }

    pub fn spec(&self) -> &VariantSpec {
        &self.spec
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Whether `key` names this variant, ignoring ASCII case.
    pub fn matches(&self, key: &str) -> bool {
        self.spec.key.eq_ignore_ascii_case(key)
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Number of columns with `x < width` at a stride of `font_size`.
fn column_count(width: f32, font_size: f32) -> usize {
    if !(font_size > 0.0) || !(width > 0.0) {
        return 0;
    }
    (width / font_size).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn spec() -> VariantSpec {
        VariantSpec::new("enter", Rgb::GREEN)
    }

    #[test]
    fn test_column_count() {
        assert_eq!(column_count(640.0, 16.0), 40);
        assert_eq!(column_count(641.0, 16.0), 41);
        assert_eq!(column_count(0.0, 16.0), 0);
        assert_eq!(column_count(640.0, 0.0), 0);
        assert_eq!(column_count(640.0, f32::NAN), 0);
    }

    #[test]
    fn test_initialize_lays_out_strides() {
        let mut rng = StdRng::seed_from_u64(1);
        let variant = Variant::new(spec(), 16.0, 100.0, 200.0, &mut rng);
        let xs: Vec<f32> = variant.columns().iter().map(Column::x).collect();
        assert_eq!(xs, [0.0, 16.0, 32.0, 48.0, 64.0, 80.0, 96.0]);
        assert!(!variant.is_active());
    }

    #[test]
    fn test_initialize_applies_speed_and_density() {
        let spec = spec().with_speed(2.0).with_density(0.75);
        let variant = Variant::new(spec, 16.0, 32.0, 200.0, &mut StepRng::new(0, 0));
        for column in variant.columns() {
            assert_eq!(column.speed(), 2.0);
            assert!((column.spawn_chance() - 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn test_inactive_tick_is_inert() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut variant = Variant::new(spec(), 16.0, 48.0, 100.0, &mut rng);
        assert_eq!(variant.columns().len(), 3);
        let before: Vec<f32> = variant.columns().iter().map(Column::y).collect();

        let mut surface = RecordingSurface::new(48.0, 100.0);
        let mut always_spawn = StepRng::new(0, 0);
        for _ in 0..5 {
            variant.tick(&mut surface, &mut always_spawn);
        }

        let after: Vec<f32> = variant.columns().iter().map(Column::y).collect();
        assert_eq!(before, after);
        assert!(variant.columns().iter().all(|c| c.chars().is_empty()));
        assert!(surface.glyphs.is_empty());
        assert!(surface.fills.is_empty());
    }

    #[test]
    fn test_active_tick_updates_then_draws() {
        let mut variant = Variant::new(spec(), 16.0, 48.0, 100.0, &mut StepRng::new(0, 0));
        variant.set_active(true);

        let mut surface = RecordingSurface::new(48.0, 100.0);
        let failed = variant.tick(&mut surface, &mut StepRng::new(0, 0));
        assert_eq!(failed, 0);

        // Every column spawned and drew its fresh glyph in the same frame.
        assert_eq!(surface.glyphs.len(), 3);
        for (glyph, column) in surface.glyphs.iter().zip(variant.columns()) {
            assert_eq!(glyph.x, column.x());
            assert_eq!(glyph.y, column.y());
            assert_eq!(glyph.color, Rgb::GREEN);
        }
    }

    #[test]
    fn test_matches_ignores_case() {
        let variant = Variant::new(spec(), 16.0, 16.0, 16.0, &mut StepRng::new(0, 0));
        assert!(variant.matches("ENTER"));
        assert!(variant.matches("Enter"));
        assert!(!variant.matches("about"));
    }
}
