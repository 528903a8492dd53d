//! Solid color fill pattern

use super::Pattern;
use crate::{color::Rgb, random::RandomSource, sink::PixelSink};

/// Fills all pixels with one color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidPattern {
    color: Rgb,
}

impl SolidPattern {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl Pattern for SolidPattern {
    fn step<S: PixelSink, R: RandomSource>(
        &mut self,
        sink: &mut S,
        _rng: &mut R,
    ) -> Result<(), S::Error> {
        sink.fill(self.color);
        sink.flush_all()
    }
}
