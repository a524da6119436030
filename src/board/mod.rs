//! Sensor board: sensor hub, motor and OLED behind one I2C address

pub mod command;
mod telemetry;

use core::fmt::Write as _;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::String;

pub use command::{MotorDirection, OLED_COLUMNS, OledFrame, OledText};
pub use telemetry::{DecimalReading, Pressure, TELEMETRY_LEN, Telemetry};

use crate::error::BoardError;

/// Default bus address of the board
pub const DEFAULT_ADDRESS: u8 = 0x10;

/// Default time the board needs after a request or display write
pub const DEFAULT_SETTLE_TIME: Duration = Duration::from_millis(50);

/// Longest decimal rendering of an `i32`
const NUMBER_TEXT_LEN: usize = 11;

/// Configuration for the sensor board
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// 7-bit bus address
    pub address: u8,
    /// Pause after telemetry requests and OLED writes
    pub settle_time: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            settle_time: DEFAULT_SETTLE_TIME,
        }
    }
}

/// Sensor board driver
///
/// Generic over the bus and delay implementations of the host board.
pub struct SensorBoard<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    settle_time: Duration,
    telemetry: Telemetry,
}

impl<I2C: I2c, D: DelayNs> SensorBoard<I2C, D> {
    pub fn new(i2c: I2C, delay: D, config: &BoardConfig) -> Self {
        Self {
            i2c,
            delay,
            address: config.address,
            settle_time: config.settle_time,
            telemetry: Telemetry::default(),
        }
    }

    /// Probe the board and return its firmware version
    pub fn init(&mut self) -> Result<u8, BoardError<I2C::Error>> {
        self.write(&[command::REG_VERSION])?;
        let mut version = [0u8; 1];
        self.i2c
            .read(self.address, &mut version)
            .map_err(BoardError::Bus)?;
        #[cfg(feature = "esp32-log")]
        println!("[SensorBoard.init] firmware version {:?}", version[0]);
        Ok(version[0])
    }

    /// Fetch a fresh telemetry frame from the sensor hub
    ///
    /// The frame is also kept as [`SensorBoard::telemetry`].
    pub fn request_telemetry(&mut self) -> Result<Telemetry, BoardError<I2C::Error>> {
        self.write(&[command::REG_TELEMETRY])?;
        let mut raw = [0u8; TELEMETRY_LEN];
        self.i2c
            .read(self.address, &mut raw)
            .map_err(BoardError::Bus)?;
        #[cfg(feature = "esp32-log")]
        println!("[SensorBoard.request_telemetry] {:?}", raw);
        self.telemetry = Telemetry::from_bytes(raw);
        self.settle();
        Ok(self.telemetry)
    }

    /// Last telemetry frame received
    pub const fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    /// Set the TDS calibration factor in hundredths
    pub fn set_tds_k(&mut self, hundredths: u16) -> Result<(), BoardError<I2C::Error>> {
        self.write(&command::tds_k_frame(hundredths))
    }

    /// Set the TVOC/CO2 sensor baseline
    pub fn set_baseline(&mut self, value: u16) -> Result<(), BoardError<I2C::Error>> {
        self.write(&command::baseline_frame(value))
    }

    pub fn run_motor(
        &mut self,
        direction: MotorDirection,
        speed: u8,
    ) -> Result<(), BoardError<I2C::Error>> {
        self.write(&command::motor_run_frame(direction, speed))
    }

    pub fn stop_motor(&mut self) -> Result<(), BoardError<I2C::Error>> {
        self.write(&command::motor_stop_frame())
    }

    /// Show `text` in columns `start..=end` (one-based) of `row`
    ///
    /// Unused columns of the window are blanked.
    pub fn show_string(
        &mut self,
        start: u8,
        end: u8,
        row: u8,
        text: &str,
    ) -> Result<(), BoardError<I2C::Error>> {
        let Some(frames) = command::oled_text_frames(start, end, row, text) else {
            return Ok(());
        };
        self.write(&frames.text)?;
        if let Some(padding) = frames.padding {
            self.write(&padding)?;
            self.settle();
        }
        self.settle();
        Ok(())
    }

    /// Show a number in columns `start..=end` (one-based) of `row`
    pub fn show_number(
        &mut self,
        start: u8,
        end: u8,
        row: u8,
        number: i32,
    ) -> Result<(), BoardError<I2C::Error>> {
        let mut text = String::<NUMBER_TEXT_LEN>::new();
        write!(text, "{}", number).map_err(|_| BoardError::InvalidLength)?;
        self.show_string(start, end, row, &text)
    }

    /// Blank columns `start..=end` (one-based) of `row`
    pub fn clear_display(
        &mut self,
        start: u8,
        end: u8,
        row: u8,
    ) -> Result<(), BoardError<I2C::Error>> {
        let Some(frame) = command::oled_blank_frame(start, end, row) else {
            return Ok(());
        };
        self.write(&frame)?;
        self.settle();
        Ok(())
    }

    /// Blank a whole OLED row
    pub fn clear_row(&mut self, row: u8) -> Result<(), BoardError<I2C::Error>> {
        self.write(&command::oled_row_blank_frame(row))
    }

    /// Give the bus and delay back
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn write(&mut self, frame: &[u8]) -> Result<(), BoardError<I2C::Error>> {
        self.i2c.write(self.address, frame).map_err(BoardError::Bus)
    }

    fn settle(&mut self) {
        let ms = u32::try_from(self.settle_time.as_millis()).unwrap_or(u32::MAX);
        self.delay.delay_ms(ms);
    }
}
