//! Pattern system with compile-time known pattern variants
//!
//! Every pattern is a small state machine: one [`Pattern::step`] call
//! renders exactly one frame and advances the animation state carried
//! between calls. Nothing here sleeps or loops over frames, so the caller
//! can poll its inputs between any two frames.
//!
//! All pattern states are stored in an enum to avoid heap allocations.

mod chase;
mod off;
mod pulse;
mod rainbow;
mod solid;
mod sparkle;

pub use chase::ChasePattern;
pub use off::OffPattern;
pub use pulse::{DEFAULT_PULSE_STEP, PulsePattern};
pub use rainbow::{RAINBOW_PERIOD, RainbowPattern};
pub use solid::SolidPattern;
pub use sparkle::{DEFAULT_SPARKLE_COUNT, MAX_SPARKLES, SparklePattern};

use crate::{
    color::{BLUE, CYAN, GREEN, MAGENTA, RED, Rgb, YELLOW},
    random::RandomSource,
    sink::PixelSink,
};

pub trait Pattern {
    /// Render a single frame and advance the animation by one step
    fn step<S: PixelSink, R: RandomSource>(
        &mut self,
        sink: &mut S,
        rng: &mut R,
    ) -> Result<(), S::Error>;
}

/// Live state of a pattern - enum containing all possible patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternState {
    /// All pixels off
    Off(OffPattern),
    /// Single solid color
    Solid(SolidPattern),
    /// Single pixel running around the rings
    Chase(ChasePattern),
    /// Rotating color wheel
    Rainbow(RainbowPattern),
    /// Triangle-wave brightness
    Pulse(PulsePattern),
    /// Random twinkling pixels
    Sparkle(SparklePattern),
}

/// Kind of a pattern, without its state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    Off,
    Solid,
    Chase,
    Rainbow,
    Pulse,
    Sparkle,
}

impl Default for PatternState {
    fn default() -> Self {
        Self::Off(OffPattern)
    }
}

impl PatternState {
    /// Render one frame of the current pattern
    pub fn step<S: PixelSink, R: RandomSource>(
        &mut self,
        sink: &mut S,
        rng: &mut R,
    ) -> Result<(), S::Error> {
        match self {
            Self::Off(pattern) => pattern.step(sink, rng),
            Self::Solid(pattern) => pattern.step(sink, rng),
            Self::Chase(pattern) => pattern.step(sink, rng),
            Self::Rainbow(pattern) => pattern.step(sink, rng),
            Self::Pulse(pattern) => pattern.step(sink, rng),
            Self::Sparkle(pattern) => pattern.step(sink, rng),
        }
    }

    /// Get the pattern kind for external observation
    pub const fn kind(&self) -> PatternKind {
        match self {
            Self::Off(_) => PatternKind::Off,
            Self::Solid(_) => PatternKind::Solid,
            Self::Chase(_) => PatternKind::Chase,
            Self::Rainbow(_) => PatternKind::Rainbow,
            Self::Pulse(_) => PatternKind::Pulse,
            Self::Sparkle(_) => PatternKind::Sparkle,
        }
    }
}

/// Registered pattern: a display name and its initial state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDescriptor {
    name: &'static str,
    initial: PatternState,
}

impl PatternDescriptor {
    pub const fn new(name: &'static str, initial: PatternState) -> Self {
        Self { name, initial }
    }

    pub const fn off(name: &'static str) -> Self {
        Self::new(name, PatternState::Off(OffPattern))
    }

    pub const fn solid(name: &'static str, color: Rgb) -> Self {
        Self::new(name, PatternState::Solid(SolidPattern::new(color)))
    }

    pub const fn chase(name: &'static str, color: Rgb) -> Self {
        Self::new(name, PatternState::Chase(ChasePattern::new(color)))
    }

    pub const fn rainbow(name: &'static str) -> Self {
        Self::new(name, PatternState::Rainbow(RainbowPattern::new()))
    }

    pub const fn pulse(name: &'static str, color: Rgb) -> Self {
        Self::new(name, PatternState::Pulse(PulsePattern::new(color)))
    }

    pub const fn sparkle(name: &'static str, color: Rgb) -> Self {
        Self::new(name, PatternState::Sparkle(SparklePattern::new(color)))
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn kind(&self) -> PatternKind {
        self.initial.kind()
    }

    /// Declared initial state
    pub const fn initial(&self) -> &PatternState {
        &self.initial
    }

    /// Fresh copy of the initial state
    pub fn fresh_state(&self) -> PatternState {
        self.initial.clone()
    }
}

/// Number of positions of the reference rotary selector
pub const REFERENCE_PATTERN_COUNT: usize = 8;

/// Reference mapping of selector positions to patterns
pub const REFERENCE_PATTERNS: [PatternDescriptor; REFERENCE_PATTERN_COUNT] = [
    PatternDescriptor::off("Off"),
    PatternDescriptor::solid("Red", RED),
    PatternDescriptor::solid("Green", GREEN),
    PatternDescriptor::solid("Blue", BLUE),
    PatternDescriptor::chase("Chase", YELLOW),
    PatternDescriptor::rainbow("Rainbow"),
    PatternDescriptor::pulse("Pulse", CYAN),
    PatternDescriptor::sparkle("Sparkle", MAGENTA),
];
