//! Strip shared between execution contexts
//!
//! Wraps an [`RgbStrip`] in a `critical-section` mutex so each operation,
//! including its transmit, runs without interruption.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::bounds::AddressRequest;
use crate::color::PackedColor;
use crate::strip::{LED_COUNT, RgbStrip, StripTransmitter};

/// A strip that can be driven from several contexts
///
/// Suitable for a `static` when `T: Send`.
pub struct SharedStrip<T: StripTransmitter, const N: usize = LED_COUNT> {
    inner: Mutex<RefCell<RgbStrip<T, N>>>,
}

impl<T: StripTransmitter, const N: usize> SharedStrip<T, N> {
    pub const fn new(strip: RgbStrip<T, N>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(strip)),
        }
    }

    /// Run `f` with exclusive access to the strip
    ///
    /// `f` must not call back into the same `SharedStrip`.
    pub fn lock<R>(&self, f: impl FnOnce(&mut RgbStrip<T, N>) -> R) -> R {
        critical_section::with(|cs| {
            let mut strip = self.inner.borrow(cs).borrow_mut();
            f(&mut strip)
        })
    }

    pub fn set_brightness(&self, level: u8) {
        self.lock(|strip| strip.set_brightness(level));
    }

    pub fn set_color(&self, address: AddressRequest, color: PackedColor) {
        self.lock(|strip| strip.set_color(address, color));
    }

    pub fn show_color(&self, color: PackedColor) {
        self.lock(|strip| strip.show_color(color));
    }

    pub fn clear(&self) {
        self.lock(RgbStrip::clear);
    }

    pub fn render_rainbow(&self, start_hue: i32, end_hue: i32) {
        self.lock(|strip| strip.render_rainbow(start_hue, end_hue));
    }

    pub fn into_inner(self) -> RgbStrip<T, N> {
        self.inner.into_inner().into_inner()
    }
}
