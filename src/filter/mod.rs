//! Output filters applied to colors on their way into the pixel buffer

mod brightness;

pub use brightness::{BrightnessFilter, DEFAULT_BRIGHTNESS};
