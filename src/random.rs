//! Random numbers for sparkling patterns
//!
//! Targets with a hardware RNG implement [`RandomSource`] on top of it;
//! everything else can use the seeded [`XorShift32`] generator.

/// Seed used when a zero seed is given, xorshift never leaves zero
const FALLBACK_SEED: u32 = 0x9E37_79B9;

/// Source of uniformly distributed 32-bit values
pub trait RandomSource {
    /// Next random value
    fn next_u32(&mut self) -> u32;

    /// Random value in `0..bound`, zero when `bound` is zero
    #[allow(clippy::cast_possible_truncation)]
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        // Multiply-shift range reduction
        ((u64::from(self.next_u32()) * bound as u64) >> 32) as usize
    }
}

/// Marsaglia xorshift generator
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { FALLBACK_SEED } else { seed },
        }
    }

    /// Seed from a 64-bit value, e.g. two hardware RNG words
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_seed64(seed: u64) -> Self {
        Self::new((seed >> 32) as u32 ^ seed as u32)
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(FALLBACK_SEED)
    }
}

impl RandomSource for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}
