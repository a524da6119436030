//! Global brightness for a strip
//!
//! Scales every color before it lands in the pixel buffer. Changing the
//! level never touches bytes that were already written.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::math8::scale8_round;
use crate::pixel_buffer::Grb;

/// Default brightness, full scale
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Brightness scaler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessFilter {
    /// Current brightness (0-255)
    level: u8,
}

impl BrightnessFilter {
    /// Create a new brightness filter
    pub const fn new(level: u8) -> Self {
        Self { level }
    }

    pub const fn level(self) -> u8 {
        self.level
    }

    /// Set the brightness used for subsequent writes
    pub fn set(&mut self, level: u8) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[BrightnessFilter.set] brightness {:?} -> {:?}",
            self.level, level
        );
        self.level = level;
    }

    /// Scale a color and reorder it for the strip
    pub const fn apply(self, color: Rgb) -> Grb {
        Grb {
            g: scale8_round(color.g, self.level),
            r: scale8_round(color.r, self.level),
            b: scale8_round(color.b, self.level),
        }
    }
}

impl Default for BrightnessFilter {
    fn default() -> Self {
        Self::new(DEFAULT_BRIGHTNESS)
    }
}
