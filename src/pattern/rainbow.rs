//! Rainbow cycling pattern
//!
//! Spreads the full color wheel once over all pixels and rotates it by
//! one hue step per frame.

use super::Pattern;
use crate::{color::wheel, random::RandomSource, sink::PixelSink};

/// Number of hue steps in one full rotation
pub const RAINBOW_PERIOD: usize = 256;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RainbowPattern {
    /// Hue offset of the first pixel
    index: u8,
}

impl RainbowPattern {
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Hue offset of the first pixel
    pub const fn index(&self) -> u8 {
        self.index
    }
}

impl Pattern for RainbowPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn step<S: PixelSink, R: RandomSource>(
        &mut self,
        sink: &mut S,
        _rng: &mut R,
    ) -> Result<(), S::Error> {
        let total = sink.total_pixels();
        if total == 0 {
            return Ok(());
        }

        for pixel in 0..total {
            let hue =
                (pixel * RAINBOW_PERIOD / total + usize::from(self.index)) % RAINBOW_PERIOD;
            sink.set(pixel, wheel(hue as u8));
        }
        sink.flush_all()?;

        self.index = self.index.wrapping_add(1);
        Ok(())
    }
}
