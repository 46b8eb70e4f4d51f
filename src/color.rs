/// Palette color utilities
///
/// The named color themes are defined in OKLCH (lightness, chroma, hue)
/// because that is how the palettes were originally designed. This module
/// converts those definitions to display RGB with a deliberately rough
/// approximation: for accent colors at moderate chroma it lands within a
/// few percent of the real transform, which is close enough for theming.

use iced::Color;

/// Approximate an OKLCH color as RGB.
///
/// # Arguments
/// * `l` - Lightness, 0.0 to 1.0
/// * `c` - Chroma, typically 0.0 to ~0.2
/// * `h` - Hue in degrees
///
/// The approximation projects the (a, b) chroma components straight onto
/// the RGB channels with fixed weights instead of going through the full
/// LMS matrix. Out-of-gamut results are clamped.
pub fn oklch(l: f32, c: f32, h: f32) -> Color {
    let hue_rad = h.to_radians();
    let a = c * hue_rad.cos();
    let b = c * hue_rad.sin();

    let r = (l + a * 0.4).clamp(0.0, 1.0);
    let g = (l - a * 0.2 + b * 0.2).clamp(0.0, 1.0);
    let blue = (l - b * 0.4).clamp(0.0, 1.0);

    Color::from_rgb(r, g, blue)
}

/// Build a Color from a packed 0xRRGGBB value.
pub fn hex(rgb: u32) -> Color {
    let r = ((rgb >> 16) & 0xFF) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xFF) as f32 / 255.0;
    let b = (rgb & 0xFF) as f32 / 255.0;
    Color::from_rgb(r, g, b)
}

/// Return `color` with the given alpha.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Linear interpolation between two colors, component-wise.
/// Used to derive muted text and surface tints from the base palette.
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::from_rgba(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_chroma_is_gray() {
        // The "boring" theme is oklch(50% 0 0) and must come out neutral
        let c = oklch(0.5, 0.0, 0.0);
        assert!((c.r - c.g).abs() < 1e-6);
        assert!((c.g - c.b).abs() < 1e-6);
    }

    #[test]
    fn test_oklch_clamps_out_of_gamut() {
        let c = oklch(1.0, 0.2, 145.0);
        assert!(c.r <= 1.0 && c.g <= 1.0 && c.b <= 1.0);
        let d = oklch(0.0, 0.2, 15.0);
        assert!(d.r >= 0.0 && d.g >= 0.0 && d.b >= 0.0);
    }

    #[test]
    fn test_hex_unpacks_channels() {
        let c = hex(0xA8A6FF);
        assert!((c.r - 168.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 166.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Color::from_rgb(0.0, 0.0, 0.0);
        let b = Color::from_rgb(1.0, 1.0, 1.0);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        let mid = mix(a, b, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
    }
}
