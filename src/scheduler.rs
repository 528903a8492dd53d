//! Selector loop scheduling
//!
//! Provides portable tick pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping between ticks.

use embassy_time::{Duration, Instant};

use crate::config::EngineConfig;
use crate::engine::{PatternEngine, PatternSwitch};
use crate::error::TickError;
use crate::random::RandomSource;
use crate::selector::PositionSource;
use crate::OutputDriver;
use crate::sink::{FrameBuffer, PixelSink};

/// Result of a tick
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule)
    pub sleep_duration: Duration,
    /// Pattern switch caused by this tick
    pub switched: Option<PatternSwitch>,
}

/// Main loop step: read the selector, advance the engine by one frame
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(selector, frame_buffer, engine, DEFAULT_TICK);
///
/// loop {
///     let now = Instant::from_millis(get_current_time_ms());
///     let result = scheduler.tick(now)?;
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct TickScheduler<P, S, R, const N: usize>
where
    P: PositionSource,
    S: PixelSink,
    R: RandomSource,
{
    selector: P,
    sink: S,
    engine: PatternEngine<R, N>,
    next_tick: Instant,
    tick_duration: Duration,
}

impl<P, S, R, const N: usize> TickScheduler<P, S, R, N>
where
    P: PositionSource,
    S: PixelSink,
    R: RandomSource,
{
    pub fn new(
        selector: P,
        sink: S,
        engine: PatternEngine<R, N>,
        tick_duration: Duration,
    ) -> Self {
        Self {
            selector,
            sink,
            engine,
            next_tick: Instant::from_millis(0),
            tick_duration,
        }
    }

    /// Process one loop iteration and return timing information
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Reads the selector and resolves the position
    /// 3. Renders one frame of the selected pattern
    /// 4. Returns the deadline for the next tick
    pub fn tick(
        &mut self,
        now: Instant,
    ) -> Result<TickResult, TickError<P::Error, S::Error>> {
        // Skip the backlog after a stall instead of bursting through it
        let max_drift = Duration::from_millis(self.tick_duration.as_millis() * 2);
        if now.as_millis() > self.next_tick.as_millis() + max_drift.as_millis() {
            self.next_tick = now;
        }

        let reading = self.selector.read_position().map_err(TickError::Selector)?;
        let switched = self
            .engine
            .on_reading(reading, &mut self.sink)
            .map_err(TickError::Sink)?;

        self.next_tick += self.tick_duration;

        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Ok(TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
            switched,
        })
    }

    pub fn engine(&self) -> &PatternEngine<R, N> {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn selector_mut(&mut self) -> &mut P {
        &mut self.selector
    }
}

impl<P, D, R, const MAX_LEDS: usize, const N: usize>
    TickScheduler<P, FrameBuffer<D, MAX_LEDS>, R, N>
where
    P: PositionSource,
    D: OutputDriver,
    R: RandomSource,
{
    /// Create a scheduler applying tick, default position and brightness of `config`
    pub fn from_config(
        selector: P,
        mut sink: FrameBuffer<D, MAX_LEDS>,
        engine: PatternEngine<R, N>,
        config: &EngineConfig,
    ) -> Self {
        sink.set_brightness(config.brightness);
        let engine = engine.with_default_position(config.default_position);
        Self::new(selector, sink, engine, config.tick)
    }
}
