mod gradient;
mod hsl;

pub use gradient::{HueDirection, RAINBOW_STEPS, hsl_gradient};
pub use hsl::{Hsl, hsl_to_packed, hsl_to_rgb};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// 24-bit color packed as `0xRRGGBB`
///
/// This is the numeric color the block editor hands around: red in bits
/// 16-23, green in 8-15, blue in 0-7. Bits above 23 are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedColor(u32);

impl PackedColor {
    pub const BLACK: Self = Self(0);

    /// Wrap a raw `0xRRGGBB` value
    pub const fn new(raw: u32) -> Self {
        Self(raw & 0x00FF_FFFF)
    }

    /// Pack separate channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            r: self.red(),
            g: self.green(),
            b: self.blue(),
        }
    }
}

impl From<Rgb> for PackedColor {
    fn from(color: Rgb) -> Self {
        Self::from_rgb(color.r, color.g, color.b)
    }
}

impl From<PackedColor> for Rgb {
    fn from(color: PackedColor) -> Self {
        color.to_rgb()
    }
}

impl From<u32> for PackedColor {
    fn from(raw: u32) -> Self {
        Self::new(raw)
    }
}

/// Pack red, green and blue channels into a single color number
pub const fn pack_color(r: u8, g: u8, b: u8) -> PackedColor {
    PackedColor::from_rgb(r, g, b)
}
