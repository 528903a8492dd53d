use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use crate::error::ConfigError;
use crate::pattern::{PatternDescriptor, PatternState};
use crate::random::RandomSource;
use crate::sink::PixelSink;

/// Selector position used before any position was observed
pub const DEFAULT_POSITION: usize = 0;

/// Emitted by the tick that switched to another pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSwitch {
    /// Selector position that caused the switch
    pub position: usize,
    /// Registry index of the newly selected pattern
    pub index: usize,
    /// Name of the newly selected pattern
    pub name: &'static str,
}

impl fmt::Display for PatternSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Switched to pattern {} {}", self.index, self.name)
    }
}

/// Mutable engine state carried between ticks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineContext {
    selected: usize,
    state: PatternState,
    previous_position: Option<usize>,
    default_position: usize,
}

impl EngineContext {
    /// Currently selected registry index
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Live state of the selected pattern
    pub const fn state(&self) -> &PatternState {
        &self.state
    }

    /// Last observed selector position
    pub const fn previous_position(&self) -> Option<usize> {
        self.previous_position
    }

    /// Resolve a selector reading into a position
    ///
    /// A reading without an active line keeps the previous position, or
    /// falls back to the default when nothing was observed yet.
    pub fn resolve(&self, reading: Option<usize>) -> usize {
        reading
            .or(self.previous_position)
            .unwrap_or(self.default_position)
    }
}

/// Pattern Engine - owns the registry and advances one frame per tick
pub struct PatternEngine<R: RandomSource, const N: usize> {
    patterns: Vec<PatternDescriptor, N>,
    context: EngineContext,
    rng: R,
}

impl<R: RandomSource, const N: usize> PatternEngine<R, N> {
    /// Register patterns and create the engine
    ///
    /// Selector position `i` selects `patterns[i]`; positions past the end
    /// wrap around.
    pub fn new(patterns: &[PatternDescriptor], rng: R) -> Result<Self, ConfigError> {
        if patterns.is_empty() {
            return Err(ConfigError::NoPatterns);
        }
        let patterns =
            Vec::from_slice(patterns).map_err(|()| ConfigError::TooManyPatterns {
                count: patterns.len(),
                max: N,
            })?;
        let context = EngineContext {
            selected: DEFAULT_POSITION,
            state: patterns[DEFAULT_POSITION].fresh_state(),
            previous_position: None,
            default_position: DEFAULT_POSITION,
        };

        Ok(Self {
            patterns,
            context,
            rng,
        })
    }

    /// Use another position while no selector line was ever active
    #[must_use]
    pub fn with_default_position(mut self, position: usize) -> Self {
        let selected = position % self.patterns.len();
        self.context.default_position = position;
        self.context.selected = selected;
        self.context.state = self.patterns[selected].fresh_state();
        self
    }

    /// Process one tick
    ///
    /// Switches patterns when the position differs from the previous tick,
    /// then renders exactly one frame of the selected pattern. Returns the
    /// switch event when one happened.
    pub fn on_tick<S: PixelSink>(
        &mut self,
        position: usize,
        sink: &mut S,
    ) -> Result<Option<PatternSwitch>, S::Error> {
        let switch = if self.context.previous_position == Some(position) {
            None
        } else {
            Some(self.switch_to(position))
        };

        self.context.state.step(sink, &mut self.rng)?;

        Ok(switch)
    }

    /// Resolve a raw selector reading and process one tick
    pub fn on_reading<S: PixelSink>(
        &mut self,
        reading: Option<usize>,
        sink: &mut S,
    ) -> Result<Option<PatternSwitch>, S::Error> {
        let position = self.context.resolve(reading);
        self.on_tick(position, sink)
    }

    /// Select the pattern for a position with a freshly initialized state
    fn switch_to(&mut self, position: usize) -> PatternSwitch {
        let selected = position % self.patterns.len();
        let descriptor = &self.patterns[selected];

        self.context.previous_position = Some(position);
        self.context.selected = selected;
        self.context.state = descriptor.fresh_state();

        let switch = PatternSwitch {
            position,
            index: selected,
            name: descriptor.name(),
        };
        #[cfg(feature = "esp32-log")]
        println!("{}", switch);

        switch
    }

    /// Engine state carried between ticks
    pub const fn context(&self) -> &EngineContext {
        &self.context
    }

    /// Currently selected registry index
    pub const fn selected(&self) -> usize {
        self.context.selected
    }

    /// Live state of the selected pattern
    pub const fn state(&self) -> &PatternState {
        &self.context.state
    }

    /// Last observed selector position
    pub const fn previous_position(&self) -> Option<usize> {
        self.context.previous_position
    }

    /// Number of registered patterns
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Registered patterns in selector order
    pub fn patterns(&self) -> &[PatternDescriptor] {
        &self.patterns
    }

    /// Descriptor of the selected pattern
    pub fn current(&self) -> &PatternDescriptor {
        &self.patterns[self.context.selected]
    }
}
