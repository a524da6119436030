//! Transmission buffer for the addressable LED strip
//!
//! WS2812-style LEDs clock in green first, so every LED is stored as a
//! `(G, R, B)` byte triple and the whole buffer is handed to the
//! transmitter as one byte slice.

use bytemuck::{Pod, Zeroable};

use crate::bounds::LedInterval;
use crate::color::Rgb;

/// One LED in wire order
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Grb {
    pub g: u8,
    pub r: u8,
    pub b: u8,
}

impl Grb {
    pub const fn new(g: u8, r: u8, b: u8) -> Self {
        Self { g, r, b }
    }
}

impl From<Rgb> for Grb {
    fn from(color: Rgb) -> Self {
        Self {
            g: color.g,
            r: color.r,
            b: color.b,
        }
    }
}

impl From<Grb> for Rgb {
    fn from(pixel: Grb) -> Self {
        Rgb {
            r: pixel.r,
            g: pixel.g,
            b: pixel.b,
        }
    }
}

/// Fixed-length pixel buffer, zeroed on creation
///
/// N is the number of LEDs in the strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Grb; N],
}

impl<const N: usize> PixelBuffer<N> {
    pub const fn new() -> Self {
        Self {
            pixels: [Grb::new(0, 0, 0); N],
        }
    }

    /// Number of LEDs
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get the pixel at `index`
    pub fn pixel(&self, index: usize) -> Option<Grb> {
        self.pixels.get(index).copied()
    }

    pub fn pixels(&self) -> &[Grb] {
        &self.pixels
    }

    /// Write one pixel
    ///
    /// Indices are resolved against the strip length before they get here;
    /// an index past the end is ignored.
    pub fn write(&mut self, index: usize, pixel: Grb) {
        if let Some(slot) = self.pixels.get_mut(index) {
            *slot = pixel;
        }
    }

    /// Write the same pixel to every LED in the interval
    pub fn fill(&mut self, interval: LedInterval, pixel: Grb) {
        let end = interval.end().min(N);
        let start = interval.start().min(end);
        self.pixels[start..end].fill(pixel);
    }

    /// Turn every LED off
    pub fn clear(&mut self) {
        self.pixels.fill(Grb::default());
    }

    /// Buffer contents in transmission order, `3 * N` bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
