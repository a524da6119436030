use core::fmt;

/// Errors raised while talking to the sensor board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError<E> {
    /// The underlying bus transfer failed
    Bus(E),
    /// A value was too long for its command frame
    InvalidLength,
}

impl<E: fmt::Debug> fmt::Display for BoardError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "bus error: {:?}", err),
            Self::InvalidLength => f.write_str("value too long for a command frame"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for BoardError<E> {}
