//! Command frames written to the sensor board
//!
//! Every frame starts with the register byte, followed by its payload.

use heapless::Vec;

pub const REG_MOTOR: u8 = 0x00;
pub const REG_TELEMETRY: u8 = 0x08;
pub const REG_VERSION: u8 = 0x0A;
pub const REG_TDS_K: u8 = 0x1E;
pub const REG_BASELINE: u8 = 0x20;
pub const REG_OLED: u8 = 0x28;

/// Characters per OLED row
pub const OLED_COLUMNS: u8 = 16;

const OLED_HEADER_LEN: usize = 3;
const OLED_BLANK: u8 = b' ';

/// Largest OLED frame: header plus one full row
pub const OLED_FRAME_LEN: usize = OLED_HEADER_LEN + OLED_COLUMNS as usize;

pub type OledFrame = Vec<u8, OLED_FRAME_LEN>;

/// Motor spin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MotorDirection {
    Clockwise = 1,
    CounterClockwise = 2,
}

pub const fn motor_run_frame(direction: MotorDirection, speed: u8) -> [u8; 3] {
    [REG_MOTOR, direction as u8, speed]
}

pub const fn motor_stop_frame() -> [u8; 3] {
    [REG_MOTOR, 0, 0]
}

/// TDS calibration factor given in hundredths, e.g. `110` for 1.10
#[allow(clippy::cast_possible_truncation)]
pub const fn tds_k_frame(hundredths: u16) -> [u8; 3] {
    [REG_TDS_K, (hundredths / 100) as u8, (hundredths % 100) as u8]
}

/// TVOC/CO2 sensor baseline
pub const fn baseline_frame(value: u16) -> [u8; 3] {
    let [high, low] = value.to_be_bytes();
    [REG_BASELINE, high, low]
}

/// Frames needed to show text in an OLED window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OledText {
    /// Text itself, written from the window start
    pub text: OledFrame,
    /// Blanks the rest of the window when the text is shorter than it
    pub padding: Option<OledFrame>,
}

/// Build the frames that put `text` into columns `start..=end` of `row`
///
/// Columns are one-based. Text longer than a row is cut to the first 16
/// bytes whatever the window; otherwise text wider than the window is cut
/// to the window. Shorter text on an inverted window produces nothing.
pub fn oled_text_frames(start: u8, end: u8, row: u8, text: &str) -> Option<OledText> {
    let bytes = text.as_bytes();
    if bytes.len() > usize::from(OLED_COLUMNS) {
        let text = oled_frame(row, start, &bytes[..usize::from(OLED_COLUMNS)]);
        return Some(OledText {
            text,
            padding: None,
        });
    }

    if end < start {
        return None;
    }
    let width = usize::from(end - start) + 1;

    if bytes.len() < width {
        let text = oled_frame(row, start, bytes);
        #[allow(clippy::cast_possible_truncation)]
        let padding = oled_blank_frame(start.saturating_add(bytes.len() as u8), end, row);
        return Some(OledText { text, padding });
    }

    let visible = width.min(usize::from(OLED_COLUMNS));
    Some(OledText {
        text: oled_frame(row, start, &bytes[..visible]),
        padding: None,
    })
}

/// Blank columns `start..=end` of `row`
///
/// `end == start - 1` gives a header-only frame; anything more inverted
/// gives nothing.
pub fn oled_blank_frame(start: u8, end: u8, row: u8) -> Option<OledFrame> {
    let len = (i16::from(end) - i16::from(start) + 1).clamp(-1, i16::from(OLED_COLUMNS));
    let len = usize::try_from(len).ok()?;
    let mut frame = oled_frame(row, start, &[]);
    for _ in 0..len {
        let _ = frame.push(OLED_BLANK);
    }
    Some(frame)
}

/// Blank a whole row
pub fn oled_row_blank_frame(row: u8) -> OledFrame {
    let mut frame = oled_frame(row, 1, &[]);
    for _ in 0..OLED_COLUMNS {
        let _ = frame.push(OLED_BLANK);
    }
    frame
}

/// Header plus up to a row of payload; longer payloads are cut
fn oled_frame(row: u8, column: u8, payload: &[u8]) -> OledFrame {
    let mut frame = OledFrame::new();
    let _ = frame.extend_from_slice(&[REG_OLED, row, column]);
    let payload = &payload[..payload.len().min(usize::from(OLED_COLUMNS))];
    let _ = frame.extend_from_slice(payload);
    frame
}
