//! Marsaglia multiply-with-carry PRNG.
//!
//! Two 16-bit multiply-with-carry lags (`z` and `w`) are stepped in
//! lockstep and their low halves concatenated into a 32-bit word. The
//! sequence is fully determined by the two seed words, so identical seeds
//! reproduce identical streams on every platform.

use super::source::UniformSource;

/// Seed substituted for a zero `z` word.
pub const DEFAULT_Z: u32 = 362_436_069;

/// Seed substituted for a zero `w` word.
pub const DEFAULT_W: u32 = 521_288_629;

/// 2^32, the divisor mapping a 32-bit word onto [0, 1).
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Multiply-with-carry PRNG with two 32-bit state words.
///
/// A zero seed word would lock its lag at zero forever, so zero is
/// replaced by [`DEFAULT_Z`] / [`DEFAULT_W`] at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marsaglia {
    z: u32,
    w: u32,
}

impl Marsaglia {
    /// Creates a new PRNG with seeds derived from system time.
    ///
    /// `z` is the current minute count and `w` the low 32 bits of the
    /// millisecond clock.
    pub fn new() -> Self {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self::with_state((millis / 60_000) as u32, millis as u32)
    }

    /// Creates a new PRNG with a fixed `z` seed and the default `w`.
    ///
    /// # Parameters
    /// - `seed`: The seed value for deterministic output.
    pub fn with_seed(seed: u32) -> Self {
        Self::with_state(seed, 0)
    }

    /// Creates a new PRNG from both state words.
    ///
    /// # Parameters
    /// - `z`: First lag seed (zero selects [`DEFAULT_Z`]).
    /// - `w`: Second lag seed (zero selects [`DEFAULT_W`]).
    pub fn with_state(z: u32, w: u32) -> Self {
        Marsaglia {
            z: if z == 0 { DEFAULT_Z } else { z },
            w: if w == 0 { DEFAULT_W } else { w },
        }
    }

    /// Returns the current `(z, w)` state words.
    pub fn state(&self) -> (u32, u32) {
        (self.z, self.w)
    }

    /// Generates the next 32-bit pseudorandom word.
    pub fn next_u32(&mut self) -> u32 {
        self.z = 36969u32
            .wrapping_mul(self.z & 0xFFFF)
            .wrapping_add(self.z >> 16);
        self.w = 18000u32
            .wrapping_mul(self.w & 0xFFFF)
            .wrapping_add(self.w >> 16);
        ((self.z & 0xFFFF) << 16) | (self.w & 0xFFFF)
    }

    /// Generates the next word reinterpreted as a signed 32-bit integer.
    pub fn next_int(&mut self) -> i32 {
        self.next_u32() as i32
    }

    /// Generates a pseudorandom double in range [0, 1).
    ///
    /// The signed word maps onto [-0.5, 0.5); negative results are lifted
    /// by one, which lands every word exactly on `word / 2^32`.
    pub fn next_double(&mut self) -> f64 {
        let value = f64::from(self.next_int()) / TWO_POW_32;
        if value < 0.0 {
            1.0 + value
        } else {
            value
        }
    }
}

impl Default for Marsaglia {
    /// Equivalent to `Marsaglia::with_state(0, 0)`: the fixed default seeds.
    fn default() -> Self {
        Self::with_state(0, 0)
    }
}

impl UniformSource for Marsaglia {
    fn next_double(&mut self) -> f64 {
        Marsaglia::next_double(self)
    }
}
