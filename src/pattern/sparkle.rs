//! Random twinkling pixels
//!
//! Every frame turns off the pixels lit by the previous frame and lights a
//! fresh random set, so a pixel never stays on longer than one frame
//! unless it is picked again.

use heapless::Vec;

use super::Pattern;
use crate::{
    color::{BLACK, Rgb},
    random::RandomSource,
    sink::PixelSink,
};

/// Default number of pixels lit per frame
pub const DEFAULT_SPARKLE_COUNT: usize = 3;

/// Upper bound of pixels lit per frame
pub const MAX_SPARKLES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparklePattern {
    color: Rgb,
    count: usize,
    /// Pixels lit by the previous frame
    prev: Vec<usize, MAX_SPARKLES>,
    /// Whether the whole output was cleared by the first frame
    primed: bool,
}

impl SparklePattern {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            count: DEFAULT_SPARKLE_COUNT,
            prev: Vec::new(),
            primed: false,
        }
    }

    /// Light another number of pixels per frame, at most [`MAX_SPARKLES`]
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = if count > MAX_SPARKLES {
            MAX_SPARKLES
        } else {
            count
        };
        self
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Pixels lit by the previous frame
    pub fn lit(&self) -> &[usize] {
        &self.prev
    }
}

impl Pattern for SparklePattern {
    fn step<S: PixelSink, R: RandomSource>(
        &mut self,
        sink: &mut S,
        rng: &mut R,
    ) -> Result<(), S::Error> {
        let total = sink.total_pixels();
        if total == 0 {
            return Ok(());
        }

        // Whatever the previous pattern left behind goes dark once
        if !self.primed {
            sink.fill(BLACK);
            self.primed = true;
        }
        for &pixel in &self.prev {
            sink.set(pixel, BLACK);
        }

        self.prev.clear();
        for _ in 0..self.count.min(self.prev.capacity()) {
            let pixel = rng.below(total);
            sink.set(pixel, self.color);
            let pushed = self.prev.push(pixel);
            debug_assert!(pushed.is_ok());
        }

        sink.flush_all()
    }
}
