#![no_std]

pub mod board;
pub mod bounds;
pub mod color;
pub mod error;
pub mod filter;
pub mod math8;
pub mod output;
pub mod pixel_buffer;
pub mod shared;
pub mod strip;

pub use board::{BoardConfig, MotorDirection, SensorBoard, Telemetry};
pub use bounds::{AddressRequest, LedInterval, pack_range};
pub use color::{Hsl, HueDirection, PackedColor, Rgb, hsl_to_packed, hsl_to_rgb, pack_color};
pub use error::BoardError;
pub use filter::BrightnessFilter;
pub use output::SmartLedsOutput;
pub use pixel_buffer::{Grb, PixelBuffer};
pub use shared::SharedStrip;
pub use strip::{DataLine, LED_COUNT, RgbStrip, StripConfig, StripTransmitter};
pub use embassy_time::Duration;
