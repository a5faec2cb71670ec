//! Compositing helpers for the terminal canvas.

use digirain_core::Rgb;
use ratatui::style::Color;

/// Source-over blend of `src` at opacity `alpha` onto `dst`.
pub fn blend(dst: [f32; 3], src: Rgb, alpha: f32) -> [f32; 3] {
    let alpha = alpha.clamp(0.0, 1.0);
    let src = src.to_f32();
    [
        dst[0] + (src[0] - dst[0]) * alpha,
        dst[1] + (src[1] - dst[1]) * alpha,
        dst[2] + (src[2] - dst[2]) * alpha,
    ]
}

/// Brightest channel, used to decide whether a cell is still visible.
pub fn luminance(rgb: [f32; 3]) -> f32 {
    rgb[0].max(rgb[1]).max(rgb[2])
}

/// Convert composited channels to a ratatui color.
pub fn to_color(rgb: [f32; 3]) -> Color {
    let channel = |v: f32| v.round().clamp(0.0, 255.0) as u8;
    Color::Rgb(channel(rgb[0]), channel(rgb[1]), channel(rgb[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let dst = [10.0, 20.0, 30.0];
        assert_eq!(blend(dst, Rgb::new(200, 100, 0), 0.0), dst);
        assert_eq!(blend(dst, Rgb::new(200, 100, 0), 1.0), [200.0, 100.0, 0.0]);
    }

    #[test]
    fn test_blend_black_overlay_scales_down() {
        let faded = blend([100.0, 200.0, 0.0], Rgb::BLACK, 0.05);
        assert!((faded[0] - 95.0).abs() < 1e-4);
        assert!((faded[1] - 190.0).abs() < 1e-4);
        assert_eq!(faded[2], 0.0);
    }

    #[test]
    fn test_to_color_rounds_and_clamps() {
        assert_eq!(to_color([0.4, 254.6, 300.0]), Color::Rgb(0, 255, 255));
    }
}
