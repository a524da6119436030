//! RGB strip driver
//!
//! Owns the pixel buffer and brightness for one LED chain. Every public
//! color operation mutates the buffer and then hands the whole buffer to
//! the transmitter exactly once.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bounds::AddressRequest;
use crate::color::{HueDirection, Hsl, PackedColor, RAINBOW_STEPS, hsl_gradient, hsl_to_rgb};
use crate::filter::{BrightnessFilter, DEFAULT_BRIGHTNESS};
use crate::pixel_buffer::PixelBuffer;

/// Number of LEDs on the reference board
pub const LED_COUNT: usize = 16;

const RAINBOW_SATURATION: i32 = 100;
const RAINBOW_LUMINANCE: i32 = 50;

/// Board pin driving the strip's data input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataLine(pub u8);

impl DataLine {
    pub const P0: Self = Self(0);
    pub const P1: Self = Self(1);
    pub const P2: Self = Self(2);
    pub const P8: Self = Self(8);
    pub const P12: Self = Self(12);
    pub const P13: Self = Self(13);
    pub const P14: Self = Self(14);
    pub const P15: Self = Self(15);
    pub const P16: Self = Self(16);
}

/// Pushes a finished pixel buffer out on a data line
///
/// Implement this trait to support different hardware platforms. The call
/// is fire-and-forget: retries and timing belong to the implementation.
pub trait StripTransmitter {
    /// Send `3 * N` bytes of `(G, R, B)` triples
    fn send_buffer(&mut self, buffer: &[u8], line: DataLine);
}

impl<T: StripTransmitter + ?Sized> StripTransmitter for &mut T {
    fn send_buffer(&mut self, buffer: &[u8], line: DataLine) {
        (**self).send_buffer(buffer, line);
    }
}

/// Configuration for the strip
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// Initial brightness (0-255)
    pub brightness: u8,
    /// Data line the strip is wired to
    pub line: DataLine,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            line: DataLine::P15,
        }
    }
}

/// RGB strip - buffer, brightness and transmitter for one LED chain
///
/// N is the number of LEDs in the strip
pub struct RgbStrip<T: StripTransmitter, const N: usize = LED_COUNT> {
    transmitter: T,
    line: DataLine,
    buffer: PixelBuffer<N>,
    brightness: BrightnessFilter,
}

impl<T: StripTransmitter, const N: usize> RgbStrip<T, N> {
    /// Create a strip with every LED off
    ///
    /// Nothing is transmitted until the first color operation.
    pub const fn new(transmitter: T, config: &StripConfig) -> Self {
        Self {
            transmitter,
            line: config.line,
            buffer: PixelBuffer::new(),
            brightness: BrightnessFilter::new(config.brightness),
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness.level()
    }

    /// Set brightness for subsequent color writes
    ///
    /// Already written LEDs keep their bytes; nothing is transmitted.
    pub fn set_brightness(&mut self, level: u8) {
        self.brightness.set(level);
    }

    /// Set the addressed LEDs to `color`
    ///
    /// A request that resolves to no LEDs leaves the buffer untouched, but
    /// the buffer is still transmitted.
    pub fn set_color(&mut self, address: AddressRequest, color: PackedColor) {
        let interval = address.resolve(N);
        if interval.is_empty() {
            #[cfg(feature = "esp32-log")]
            println!("[RgbStrip.set_color] {:?} addresses no LEDs", address);
        }
        let pixel = self.brightness.apply(color.to_rgb());
        self.buffer.fill(interval, pixel);
        self.flush();
    }

    /// Set every LED to `color`
    pub fn show_color(&mut self, color: PackedColor) {
        self.set_color(AddressRequest::All, color);
    }

    /// Turn every LED off
    pub fn clear(&mut self) {
        self.show_color(PackedColor::BLACK);
    }

    /// Render a clockwise rainbow from `start_hue` to `end_hue`
    ///
    /// Writes [`RAINBOW_STEPS`] LEDs from index 0 at full saturation and
    /// half luminance; the rest of the strip is left as it was.
    pub fn render_rainbow(&mut self, start_hue: i32, end_hue: i32) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[RgbStrip.render_rainbow] hue {:?} -> {:?}",
            start_hue, end_hue
        );
        let start = Hsl::new(start_hue, RAINBOW_SATURATION, RAINBOW_LUMINANCE);
        let end = Hsl::new(end_hue, RAINBOW_SATURATION, RAINBOW_LUMINANCE);
        let stops = hsl_gradient::<RAINBOW_STEPS>(start, end, HueDirection::Clockwise);
        for (index, stop) in stops.into_iter().enumerate() {
            let pixel = self.brightness.apply(hsl_to_rgb(stop));
            self.buffer.write(index, pixel);
        }
        self.flush();
    }

    /// Current buffer contents
    pub const fn buffer(&self) -> &PixelBuffer<N> {
        &self.buffer
    }

    pub const fn line(&self) -> DataLine {
        self.line
    }

    pub const fn transmitter(&self) -> &T {
        &self.transmitter
    }

    pub fn transmitter_mut(&mut self) -> &mut T {
        &mut self.transmitter
    }

    /// Give the transmitter back
    pub fn release(self) -> T {
        self.transmitter
    }

    fn flush(&mut self) {
        self.transmitter.send_buffer(self.buffer.as_bytes(), self.line);
    }
}
