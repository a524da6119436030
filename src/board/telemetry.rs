//! Sensor hub telemetry frame
//!
//! The hub answers a telemetry request with a fixed 27 byte record. Each
//! reading sits at a fixed offset; multi-byte values are big-endian.

use core::fmt;

/// Length of one telemetry frame
pub const TELEMETRY_LEN: usize = 27;

const UV: usize = 0;
const LIGHT: usize = 2;
const SOUND: usize = 4;
const WATER_TEMPERATURE: usize = 6;
const AIR_TEMPERATURE_SIGN: usize = 8;
const AIR_TEMPERATURE: usize = 9;
const HUMIDITY: usize = 11;
const PRESSURE: usize = 13;
const TDS: usize = 16;
const CO2: usize = 18;
const TVOC: usize = 20;
const LUX: usize = 24;

/// Sign byte value marking a positive air temperature
const SIGN_POSITIVE: u8 = 1;

/// Reading reported as separate integer and fraction bytes
///
/// The fraction is the literal digits after the decimal point, so
/// `{ integer: 3, fraction: 25 }` reads as `3.25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecimalReading {
    pub negative: bool,
    pub integer: u8,
    pub fraction: u8,
}

impl DecimalReading {
    const fn positive(integer: u8, fraction: u8) -> Self {
        Self {
            negative: false,
            integer,
            fraction,
        }
    }
}

impl fmt::Display for DecimalReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}.{}", self.integer, self.fraction)
    }
}

/// Barometric pressure in pascals
///
/// Displays as kilopascals with two truncated decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pressure(pub u32);

impl Pressure {
    pub const fn pascals(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 1000, (self.0 % 1000) / 10)
    }
}

/// Decoded view over one telemetry frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Telemetry {
    raw: [u8; TELEMETRY_LEN],
}

impl Telemetry {
    pub const fn from_bytes(raw: [u8; TELEMETRY_LEN]) -> Self {
        Self { raw }
    }

    pub const fn as_bytes(&self) -> &[u8; TELEMETRY_LEN] {
        &self.raw
    }

    /// Ultraviolet intensity
    pub const fn ultraviolet(&self) -> DecimalReading {
        self.decimal(UV)
    }

    /// Ambient light level
    pub const fn light_level(&self) -> u16 {
        self.u16_at(LIGHT)
    }

    /// Sound level
    pub const fn sound_level(&self) -> u16 {
        self.u16_at(SOUND)
    }

    /// Water probe temperature, °C
    pub const fn water_temperature(&self) -> DecimalReading {
        self.decimal(WATER_TEMPERATURE)
    }

    /// Air temperature, °C
    ///
    /// Below zero the hub reports the fraction as `255 - digits`.
    pub const fn air_temperature(&self) -> DecimalReading {
        let integer = self.raw[AIR_TEMPERATURE];
        let fraction = self.raw[AIR_TEMPERATURE + 1];
        if self.raw[AIR_TEMPERATURE_SIGN] == SIGN_POSITIVE {
            DecimalReading::positive(integer, fraction)
        } else {
            DecimalReading {
                negative: true,
                integer,
                fraction: 255 - fraction,
            }
        }
    }

    /// Relative humidity, %
    pub const fn humidity(&self) -> DecimalReading {
        self.decimal(HUMIDITY)
    }

    pub const fn pressure(&self) -> Pressure {
        Pressure(self.u24_at(PRESSURE))
    }

    /// Total dissolved solids, ppm
    pub const fn tds(&self) -> u16 {
        self.u16_at(TDS)
    }

    /// CO2 concentration, ppm
    pub const fn co2(&self) -> u16 {
        self.u16_at(CO2)
    }

    /// Total volatile organic compounds, ppb
    pub const fn tvoc(&self) -> u16 {
        self.u16_at(TVOC)
    }

    /// Illuminance, lux
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lux(&self) -> u32 {
        let raw = f64::from(self.u24_at(LUX));
        libm::round(raw * 0.6 / 18.0) as u32
    }

    const fn decimal(&self, offset: usize) -> DecimalReading {
        DecimalReading::positive(self.raw[offset], self.raw[offset + 1])
    }

    const fn u16_at(&self, offset: usize) -> u16 {
        u16::from_be_bytes([self.raw[offset], self.raw[offset + 1]])
    }

    const fn u24_at(&self, offset: usize) -> u32 {
        u32::from_be_bytes([
            0,
            self.raw[offset],
            self.raw[offset + 1],
            self.raw[offset + 2],
        ])
    }
}
