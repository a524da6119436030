/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0), rounding to nearest
///
/// Matches `round(value * scale / 255)` exactly. Ties cannot happen:
/// `2 * value * scale` is even while `255 * (2k + 1)` is odd.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8_round(value: u8, scale: u8) -> u8 {
    let product = value as u32 * scale as u32;
    ((product * 2 + 255) / 510) as u8
}
