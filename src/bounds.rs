//! LED addressing
//!
//! Maps an [`AddressRequest`] to the interval of strip indices it touches.
//! Anything that would land outside the strip resolves to an empty
//! interval, so callers can never write past the buffer.

use core::ops::Range;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Tag stored in the middle byte of a packed range
pub const PACKED_RANGE_TAG: u32 = 0x02;

/// Largest zero-based index a packed slot value may carry as a plain index
pub const PACKED_INDEX_MAX: u32 = 15;

/// Which LEDs a color operation touches
///
/// `Single` and `Range` take zero-based indices; `Range` is inclusive on both
/// ends. `Packed` carries the one-based number a block-editor slot holds:
/// either a plain LED number or a range built by [`pack_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressRequest {
    Single(usize),
    Range(usize, usize),
    All,
    Packed(u32),
}

impl AddressRequest {
    /// Resolve against a strip of `led_count` LEDs
    pub fn resolve(self, led_count: usize) -> LedInterval {
        resolve(self, led_count)
    }
}

/// Contiguous run of LED indices, possibly empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedInterval {
    start: usize,
    end: usize,
}

impl LedInterval {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Interval covering `first..=last`; empty when `first > last`
    pub const fn inclusive(first: usize, last: usize) -> Self {
        if first > last {
            return Self::EMPTY;
        }
        Self {
            start: first,
            end: last + 1,
        }
    }

    /// First index covered
    pub const fn start(self) -> usize {
        self.start
    }

    /// One past the last index covered
    pub const fn end(self) -> usize {
        self.end
    }

    pub const fn len(self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub const fn first(self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.start)
        }
    }

    pub const fn last(self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    pub const fn indices(self) -> Range<usize> {
        self.start..self.end
    }
}

/// Resolve an address request against a strip of `led_count` LEDs
pub fn resolve(request: AddressRequest, led_count: usize) -> LedInterval {
    match request {
        AddressRequest::Single(index) => clamped(index, index, led_count),
        AddressRequest::Range(from, to) => clamped(from, to, led_count),
        AddressRequest::All => match led_count.checked_sub(1) {
            Some(last) => LedInterval::inclusive(0, last),
            None => LedInterval::EMPTY,
        },
        AddressRequest::Packed(value) => match decode_packed(value) {
            Some(request) => resolve(request, led_count),
            None => {
                #[cfg(feature = "esp32-log")]
                println!("[bounds.resolve] malformed packed address {:#08x}", value);
                LedInterval::EMPTY
            }
        },
    }
}

/// Decode a one-based slot value into a zero-based request
///
/// After dropping to zero-based, values up to [`PACKED_INDEX_MAX`] are plain
/// indices. Larger values are ranges only when their middle byte holds
/// [`PACKED_RANGE_TAG`]; the first index sits in the bytes above it and the
/// last index in the low byte.
pub fn decode_packed(value: u32) -> Option<AddressRequest> {
    let raw = value.checked_sub(1)?;
    if raw <= PACKED_INDEX_MAX {
        return Some(AddressRequest::Single(raw as usize));
    }
    if (raw >> 8) & 0xFF != PACKED_RANGE_TAG {
        return None;
    }
    Some(AddressRequest::Range(
        (raw >> 16) as usize,
        (raw & 0xFF) as usize,
    ))
}

/// Encode the one-based LED range `from..=to` into a single slot value
///
/// `from` below 1 is treated as 1.
pub const fn pack_range(from: u8, to: u8) -> u32 {
    let from = from.saturating_sub(1) as u32;
    (from << 16) + (PACKED_RANGE_TAG << 8) + to as u32
}

const fn clamped(first: usize, last: usize, led_count: usize) -> LedInterval {
    if first >= led_count {
        return LedInterval::EMPTY;
    }
    let last = if last >= led_count { led_count - 1 } else { last };
    LedInterval::inclusive(first, last)
}
