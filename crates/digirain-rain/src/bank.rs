//! The effect bank: every variant plus the single-active-variant invariant.

use digirain_core::{Rgb, Surface, VariantSpec};
use rand::Rng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::variant::Variant;

/// Opacity of the black overlay painted before each frame.
pub const DEFAULT_TRAIL_ALPHA: f32 = 0.05;

/// Errors returned by [`EffectBank`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("no rain variant named `{0}`")]
    UnknownVariant(String),
}

/// All rain variants, at most one of which is active.
#[derive(Debug)]
pub struct EffectBank<R = StdRng> {
    variants: Vec<Variant>,
    font_size: f32,
    trail_alpha: f32,
    width: f32,
    height: f32,
    rng: R,
}

impl<R: Rng> EffectBank<R> {
    /// Build one inactive variant per spec, laid out for the given canvas.
    ///
    /// Keys are expected to be unique; lookups resolve to the first match.
    pub fn new(
        specs: impl IntoIterator<Item = VariantSpec>,
        font_size: f32,
        width: f32,
        height: f32,
        mut rng: R,
    ) -> Self {
        let variants = specs
            .into_iter()
            .map(|spec| Variant::new(spec, font_size, width, height, &mut rng))
            .collect();

        Self {
            variants,
            font_size,
            trail_alpha: DEFAULT_TRAIL_ALPHA,
            width,
            height,
            rng,
        }
    }

    /// Override the per-frame trail overlay opacity.
    pub fn with_trail_alpha(mut self, alpha: f32) -> Self {
        self.trail_alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Make `key` the only active variant.
    ///
    /// An unknown key leaves the current selection untouched.
    pub fn set_active(&mut self, key: &str) -> Result<(), BankError> {
        let idx = self
            .position(key)
            .ok_or_else(|| BankError::UnknownVariant(key.to_string()))?;

        for variant in &mut self.variants {
            variant.set_active(false);
        }
        self.variants[idx].set_active(true);

        tracing::debug!(key = self.variants[idx].key(), "activated rain variant");
        Ok(())
    }

    /// Switch every variant off.
    pub fn deactivate_all(&mut self) {
        for variant in &mut self.variants {
            variant.set_active(false);
        }
        tracing::debug!("deactivated all rain variants");
    }

    /// Key of the active variant, if any.
    pub fn active_key(&self) -> Option<&str> {
        self.variants
            .iter()
            .find(|v| v.is_active())
            .map(Variant::key)
    }

    /// Paint color of the active variant, if any.
    pub fn active_color(&self) -> Option<Rgb> {
        self.variants
            .iter()
            .find(|v| v.is_active())
            .map(Variant::color)
    }

    pub fn get(&self, key: &str) -> Option<&Variant> {
        self.position(key).map(|idx| &self.variants[idx])
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(Variant::key)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Canvas size the columns are currently laid out for.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Re-lay every variant's columns for a new canvas size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        for variant in &mut self.variants {
            variant.initialize(width, height, &mut self.rng);
        }
        tracing::debug!(width, height, font_size = self.font_size, "relaid rain columns");
    }

    /// Run one animation frame: fade the surface, then tick every variant.
    pub fn render_frame(&mut self, surface: &mut dyn Surface) {
        let (width, height) = (surface.width(), surface.height());
        surface.fill_rect(0.0, 0.0, width, height, Rgb::BLACK, self.trail_alpha);
        self.tick(surface);
    }

    /// Tick every variant without painting the trail overlay.
    ///
    /// Inactive variants return immediately, so only the active one draws.
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        let mut failed = 0;
        for variant in &mut self.variants {
            failed += variant.tick(surface, &mut self.rng);
        }
        if failed > 0 {
            tracing::trace!(failed, "glyphs skipped this frame");
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.variants.iter().position(|v| v.matches(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;
    use rand::SeedableRng;
    use rand::rngs::mock::StepRng;

    fn bank() -> EffectBank {
        EffectBank::new(
            VariantSpec::defaults(),
            16.0,
            160.0,
            320.0,
            StdRng::seed_from_u64(11),
        )
    }

    fn active_count<R: Rng>(bank: &EffectBank<R>) -> usize {
        bank.variants().iter().filter(|v| v.is_active()).count()
    }

    #[test]
    fn test_new_bank_is_idle() {
        let bank = bank();
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.active_key(), None);
        assert!(bank.variants().iter().all(|v| v.columns().len() == 10));
    }

    #[test]
    fn test_switching_keeps_one_active() {
        let mut bank = bank();
        bank.set_active("enter").unwrap();
        assert_eq!(bank.active_key(), Some("enter"));
        assert_eq!(active_count(&bank), 1);

        bank.set_active("about").unwrap();
        assert!(!bank.get("enter").unwrap().is_active());
        assert!(bank.get("about").unwrap().is_active());
        assert_eq!(active_count(&bank), 1);
        assert_eq!(bank.active_color(), Some(Rgb::new(0, 255, 255)));
    }

    #[test]
    fn test_set_active_ignores_case() {
        let mut bank = bank();
        bank.set_active("CONTACT").unwrap();
        assert_eq!(bank.active_key(), Some("contact"));
    }

    #[test]
    fn test_unknown_key_keeps_selection() {
        let mut bank = bank();
        bank.set_active("about").unwrap();
        let err = bank.set_active("abuot").unwrap_err();
        assert_eq!(err, BankError::UnknownVariant("abuot".to_string()));
        assert_eq!(bank.active_key(), Some("about"));
    }

    #[test]
    fn test_deactivate_all() {
        let mut bank = bank();
        bank.set_active("enter").unwrap();
        bank.deactivate_all();
        assert_eq!(bank.active_key(), None);
        assert_eq!(active_count(&bank), 0);
    }

    #[test]
    fn test_resize_relays_columns() {
        let mut bank = bank();
        bank.set_active("enter").unwrap();
        bank.resize(320.0, 100.0);
        assert_eq!(bank.size(), (320.0, 100.0));
        for variant in bank.variants() {
            assert_eq!(variant.columns().len(), 20);
            assert!(variant.columns().iter().all(|c| c.y() < 100.0));
        }
        // Resizing does not change which variant is active.
        assert_eq!(bank.active_key(), Some("enter"));
    }

    #[test]
    fn test_render_frame_fades_then_draws_active_only() {
        let mut bank = EffectBank::new(
            VariantSpec::defaults(),
            16.0,
            48.0,
            100.0,
            StepRng::new(0, 0),
        );
        bank.set_active("about").unwrap();

        let mut surface = RecordingSurface::new(48.0, 100.0);
        bank.render_frame(&mut surface);

        assert_eq!(surface.fills.len(), 1);
        let fill = &surface.fills[0];
        assert_eq!((fill.w, fill.h), (48.0, 100.0));
        assert_eq!(fill.color, Rgb::BLACK);
        assert_eq!(fill.alpha, DEFAULT_TRAIL_ALPHA);
        assert_eq!(surface.first_glyph_call, Some(1));

        assert_eq!(surface.glyphs.len(), 3);
        assert!(surface.glyphs.iter().all(|g| g.color == Rgb::new(0, 255, 255)));
        // Only the active variant's columns moved.
        assert!(bank.get("enter").unwrap().columns().iter().all(|c| c.y() == 0.0));
    }

    #[test]
    fn test_render_frame_when_idle_only_fades() {
        let mut bank = bank().with_trail_alpha(0.2);
        let mut surface = RecordingSurface::new(160.0, 320.0);
        for _ in 0..5 {
            bank.render_frame(&mut surface);
        }
        assert_eq!(surface.fills.len(), 5);
        assert!(surface.fills.iter().all(|f| f.alpha == 0.2));
        assert!(surface.glyphs.is_empty());
    }
}
