use super::Pattern;
use crate::{color::BLACK, random::RandomSource, sink::PixelSink};

/// Turns every pixel off
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffPattern;

impl Pattern for OffPattern {
    fn step<S: PixelSink, R: RandomSource>(
        &mut self,
        sink: &mut S,
        _rng: &mut R,
    ) -> Result<(), S::Error> {
        sink.fill(BLACK);
        sink.flush_all()
    }
}
