#![no_std]

pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod math8;
pub mod pattern;
pub mod random;
pub mod scheduler;
pub mod selector;
pub mod sink;

pub use config::{DEFAULT_TICK, EngineConfig, REFERENCE_CONFIG};
pub use engine::{EngineContext, PatternEngine, PatternSwitch};
pub use error::{ConfigError, TickError};
pub use layout::RingLayout;
pub use pattern::{PatternDescriptor, PatternKind, PatternState, REFERENCE_PATTERNS};
pub use random::{RandomSource, XorShift32};
pub use scheduler::{TickResult, TickScheduler};
pub use selector::{PositionSource, Selector};
pub use sink::{FrameBuffer, PixelSink, SmartLedsOutput};

pub use color::{Rgb, wheel};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`FrameBuffer`] is generic over this trait.
pub trait OutputDriver {
    /// Error reported by the hardware
    type Error;

    /// Write colors to the LED chain, all rings back to back
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}
