//! Rotary selector input
//!
//! A rotary switch pulls exactly one of its lines low. Lines are scanned in
//! their wiring order and the first active one wins, so the order of the
//! pins handed to [`Selector::new`] is the pattern index mapping.

use embedded_hal::digital::InputPin;

use crate::error::ConfigError;

/// Source of selector positions
pub trait PositionSource {
    type Error;

    /// Index of the first active line, `None` when no line is active
    fn read_position(&mut self) -> Result<Option<usize>, Self::Error>;

    /// Read the position, falling back to `default` when no line is active
    fn read_position_or(&mut self, default: usize) -> Result<usize, Self::Error> {
        Ok(self.read_position()?.unwrap_or(default))
    }
}

/// Rotary selector over active-low input pins
pub struct Selector<P: InputPin, const LINES: usize> {
    lines: [P; LINES],
}

impl<P: InputPin, const LINES: usize> Selector<P, LINES> {
    pub fn new(lines: [P; LINES]) -> Result<Self, ConfigError> {
        if LINES == 0 {
            return Err(ConfigError::NoSelectorLines);
        }
        Ok(Self { lines })
    }

    /// Number of selector lines
    pub const fn line_count(&self) -> usize {
        LINES
    }

    /// Release the input pins
    pub fn into_lines(self) -> [P; LINES] {
        self.lines
    }
}

impl<P: InputPin, const LINES: usize> PositionSource for Selector<P, LINES> {
    type Error = P::Error;

    fn read_position(&mut self) -> Result<Option<usize>, Self::Error> {
        for (index, line) in self.lines.iter_mut().enumerate() {
            if line.is_low()? {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }
}
