//! Single running pixel

use super::Pattern;
use crate::{
    color::{BLACK, Rgb},
    random::RandomSource,
    sink::PixelSink,
};

/// Lights one pixel per frame and moves it forward by one
///
/// The cursor walks the flat pixel space, so on a multi-ring layout the
/// dot runs through every ring in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChasePattern {
    color: Rgb,
    /// Pixel lit by the next frame
    index: usize,
}

impl ChasePattern {
    pub const fn new(color: Rgb) -> Self {
        Self { color, index: 0 }
    }

    /// Start the dot at another pixel
    #[must_use]
    pub const fn with_start(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Pixel lit by the next frame
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl Pattern for ChasePattern {
    fn step<S: PixelSink, R: RandomSource>(
        &mut self,
        sink: &mut S,
        _rng: &mut R,
    ) -> Result<(), S::Error> {
        let total = sink.total_pixels();
        if total == 0 {
            return Ok(());
        }
        let lit = self.index % total;

        sink.fill(BLACK);
        sink.set(lit, self.color);
        sink.flush_all()?;

        self.index = (lit + 1) % total;
        Ok(())
    }
}
