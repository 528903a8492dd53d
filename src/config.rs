//! Startup configuration
//!
//! Everything here is fixed for the lifetime of the process.

use embassy_time::Duration;

use crate::engine::DEFAULT_POSITION;

/// Ring sizes of the reference three-ring deployment
pub const REFERENCE_RING_SIZES: [u16; 3] = [8, 16, 24];

/// Ring sizes of the single flattened ring deployment
pub const SINGLE_RING_SIZES: [u16; 1] = [48];

/// Number of lines of the reference rotary selector
pub const REFERENCE_SELECTOR_LINES: usize = 8;

/// Default delay between loop iterations
pub const DEFAULT_TICK: Duration = Duration::from_millis(20);

/// Output brightness of the reference deployment (about one half)
pub const REFERENCE_BRIGHTNESS: u8 = 128;

/// Configuration of the selector loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Delay between loop iterations
    pub tick: Duration,
    /// Position used until a selector line was seen active
    pub default_position: usize,
    /// Global output brightness (0-255 = 0.0-1.0)
    pub brightness: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick: DEFAULT_TICK,
            default_position: DEFAULT_POSITION,
            brightness: u8::MAX,
        }
    }
}

/// Configuration of the reference deployment
pub const REFERENCE_CONFIG: EngineConfig = EngineConfig {
    tick: DEFAULT_TICK,
    default_position: DEFAULT_POSITION,
    brightness: REFERENCE_BRIGHTNESS,
};
