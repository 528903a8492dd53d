//! Breathing brightness pattern
//!
//! Brightness follows a triangle wave between 0 and 100 percent. With the
//! default step of 1 a full period takes 200 frames.

use super::Pattern;
use crate::{
    color::{FULL_LEVEL, Rgb, scale_percent},
    random::RandomSource,
    sink::PixelSink,
};

/// Default brightness change per frame, in percent
pub const DEFAULT_PULSE_STEP: i8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulsePattern {
    color: Rgb,
    /// Brightness of the next frame, 0-100
    level: u8,
    /// Signed brightness change per frame
    step: i8,
}

impl PulsePattern {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            level: 0,
            step: DEFAULT_PULSE_STEP,
        }
    }

    /// Change brightness faster; the magnitude is kept in `1..=100`
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn with_step(mut self, step: u8) -> Self {
        let step = if step == 0 {
            1
        } else if step > FULL_LEVEL {
            FULL_LEVEL
        } else {
            step
        };
        self.step = step as i8;
        self
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Brightness of the next frame, 0-100
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Signed brightness change per frame
    pub const fn step_size(&self) -> i8 {
        self.step
    }
}

impl Pattern for PulsePattern {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn step<S: PixelSink, R: RandomSource>(
        &mut self,
        sink: &mut S,
        _rng: &mut R,
    ) -> Result<(), S::Error> {
        sink.fill(scale_percent(self.color, self.level));
        sink.flush_all()?;

        let next = (i16::from(self.level) + i16::from(self.step))
            .clamp(0, i16::from(FULL_LEVEL));
        self.level = next as u8;
        if self.level == 0 || self.level == FULL_LEVEL {
            self.step = -self.step;
        }
        Ok(())
    }
}
