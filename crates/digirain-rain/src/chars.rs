//! Glyph alphabet for the rain.

use rand::Rng;

/// First code point of the rain alphabet (the katakana block).
const GLYPH_BASE: u32 = 0x30A0;

/// Number of symbols in the rain alphabet.
pub const GLYPH_COUNT: usize = 96;

/// The 96 katakana-block symbols, U+30A0 through U+30FF.
pub const RAIN_GLYPHS: [char; GLYPH_COUNT] = build_glyphs();

const fn build_glyphs() -> [char; GLYPH_COUNT] {
    let mut glyphs = ['\u{30A0}'; GLYPH_COUNT];
    let mut i = 0;
    while i < GLYPH_COUNT {
        glyphs[i] = match char::from_u32(GLYPH_BASE + i as u32) {
            Some(c) => c,
            None => '\u{30A0}',
        };
        i += 1;
    }
    glyphs
}

/// Pick a glyph uniformly from [`RAIN_GLYPHS`].
pub fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> char {
    let idx = (rng.r#gen::<f32>() * GLYPH_COUNT as f32) as usize;
    RAIN_GLYPHS[idx.min(GLYPH_COUNT - 1)]
}
