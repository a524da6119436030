//! Output adapter for `smart-leds` drivers

use smart_leds::SmartLedsWrite;

use crate::color::Rgb;
use crate::strip::{DataLine, StripTransmitter};

/// Transmitter backed by any [`SmartLedsWrite`] driver
///
/// The driver is already bound to its pin, so the data line passed with
/// each buffer is ignored. Write errors are dropped.
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn release(self) -> W {
        self.writer
    }
}

impl<W> StripTransmitter for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn send_buffer(&mut self, buffer: &[u8], _line: DataLine) {
        let colors = buffer.chunks_exact(3).map(|grb| Rgb {
            r: grb[1],
            g: grb[0],
            b: grb[2],
        });
        let _ = self.writer.write(colors);
    }
}
