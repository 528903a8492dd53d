//! Error types
//!
//! Configuration problems are detected once, at construction time, and are
//! fatal: the caller should report them and never enter the tick loop.
//! Runtime failures of the collaborators (selector pins, LED driver) are
//! carried by [`TickError`] with the collaborator's own error type.

use core::fmt;

/// Invalid startup configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Ring layout has no rings
    EmptyLayout,
    /// Ring at the given position has zero pixels
    EmptyRing { ring: usize },
    /// More rings than the layout can hold
    TooManyRings { count: usize, max: usize },
    /// Total pixel count does not fit the frame buffer
    LayoutExceedsBuffer { total: usize, capacity: usize },
    /// Pattern registry is empty
    NoPatterns,
    /// More patterns than the registry can hold
    TooManyPatterns { count: usize, max: usize },
    /// Selector has no input lines
    NoSelectorLines,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLayout => write!(f, "ring layout is empty"),
            Self::EmptyRing { ring } => write!(f, "ring {} has no pixels", ring),
            Self::TooManyRings { count, max } => {
                write!(f, "{} rings configured, at most {} supported", count, max)
            }
            Self::LayoutExceedsBuffer { total, capacity } => write!(
                f,
                "layout needs {} pixels, frame buffer holds {}",
                total, capacity
            ),
            Self::NoPatterns => write!(f, "no patterns registered"),
            Self::TooManyPatterns { count, max } => {
                write!(f, "{} patterns registered, at most {} supported", count, max)
            }
            Self::NoSelectorLines => write!(f, "selector has no input lines"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Failure of one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickError<S, O> {
    /// Reading the selector lines failed
    Selector(S),
    /// Publishing a frame to the LEDs failed
    Sink(O),
}

impl<S: fmt::Debug, O: fmt::Debug> fmt::Display for TickError<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(err) => write!(f, "selector read failed: {:?}", err),
            Self::Sink(err) => write!(f, "pixel output failed: {:?}", err),
        }
    }
}

impl<S: fmt::Debug, O: fmt::Debug> core::error::Error for TickError<S, O> {}
