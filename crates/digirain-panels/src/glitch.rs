//! Time-driven cosmetic overlays: the title glitch and the scanline sweep.

/// Title glitch period.
pub const GLITCH_PERIOD_MS: u64 = 3000;
/// How long each glitch lasts.
pub const GLITCH_DURATION_MS: u64 = 100;
/// One full scanline sweep.
pub const SCANLINE_PERIOD_MS: u64 = 8000;

/// Whether the title is mid-glitch at `elapsed_ms`.
///
/// The first glitch fires one full period after start.
pub fn is_glitching(elapsed_ms: u64) -> bool {
    elapsed_ms >= GLITCH_PERIOD_MS && elapsed_ms % GLITCH_PERIOD_MS < GLITCH_DURATION_MS
}

/// Row of the scanline on a screen `height` rows tall, if it is on screen.
///
/// The line sweeps from half a screen above the top to the bottom edge.
pub fn scanline_row(elapsed_ms: u64, height: u16) -> Option<u16> {
    let progress = (elapsed_ms % SCANLINE_PERIOD_MS) as f32 / SCANLINE_PERIOD_MS as f32;
    let top = -0.5 + 1.5 * progress;
    if !(0.0..1.0).contains(&top) {
        return None;
    }
    let row = (top * height as f32) as u16;
    (row < height).then_some(row)
}
