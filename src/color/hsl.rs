use crate::color::{PackedColor, Rgb};

/// Largest saturation/luminance percentage the conversion accepts
const PERCENT_MAX: i32 = 99;

/// Hue/saturation/luminance triple
///
/// Hue is in degrees and may be any integer, including negative values.
/// Saturation and luminance are percentages; they are clamped to `0..=99`
/// on conversion, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hsl {
    pub hue: i32,
    pub saturation: i32,
    pub luminance: i32,
}

impl Hsl {
    pub const fn new(hue: i32, saturation: i32, luminance: i32) -> Self {
        Self {
            hue,
            saturation,
            luminance,
        }
    }
}

/// Convert HSL to a packed `0xRRGGBB` color using integer math only
pub fn hsl_to_packed(hsl: Hsl) -> PackedColor {
    let color = hsl_to_rgb(hsl);
    PackedColor::from_rgb(color.r, color.g, color.b)
}

/// Convert HSL to RGB using integer math only
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let (r, g, b) = components(hsl);
    Rgb {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

/// Unclamped channel values. Every value is already in `0..=255`.
fn components(hsl: Hsl) -> (i32, i32, i32) {
    let h = hsl.hue.rem_euclid(360);
    let s = hsl.saturation.clamp(0, PERCENT_MAX);
    let l = hsl.luminance.clamp(0, PERCENT_MAX);

    // Chroma, [0,255]
    let c = (((100 - (2 * l - 100).abs()) * s) << 8) / 10_000;
    // Sector [0,5] and position within the sector [0,255]
    let h1 = h / 60;
    let h2 = (h - h1 * 60) * 256 / 60;
    // Second largest component, [0,255]
    let x = (c * (256 - ((((h1 % 2) << 8) + h2) - 256).abs())) >> 8;

    let (r, g, b) = match h1 {
        0 => (c, x, 0),
        1 => (x, c, 0),
        2 => (0, c, x),
        3 => (0, x, c),
        4 => (x, 0, c),
        _ => (c, 0, x),
    };

    let m = (((l * 2) << 8) / 100 - c) / 2;
    (r + m, g + m, b + m)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn channel(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}
