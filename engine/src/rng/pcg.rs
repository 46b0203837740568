//! PCG32 random number generator
//!
//! This is a fast, statistically strong PRNG that is deterministic and
//! suitable for replay, procedural generation and simulation. It is NOT
//! suitable for anything security sensitive.
//!
//! # Algorithm
//!
//! A 64-bit LCG advances the state; the output is an XSH-RR permutation
//! (xorshift high bits, random rotate) of the state *before* the advance.
//! The increment selects one of 2^63 independent streams.
//!
//! # Determinism
//!
//! Same (seed, stream) → same sequence of random numbers. This is CRITICAL for:
//! - Replay systems (reproduce an exact run)
//! - Procedural generation (same world from same seed)
//! - Testing (verify behavior)

use crate::ambient;
use crate::distributions::RandomSource;
use serde::{Deserialize, Serialize};

/// LCG multiplier for the 64-bit state
pub const MULTIPLIER: u64 = 6364136223846793005;

/// State of a generator that has never been seeded
pub const DEFAULT_STATE: u64 = 0x853C_49E6_748F_EA9B;

/// Increment of a generator that has never been seeded
pub const DEFAULT_INCREMENT: u64 = 0xDA3E_39CB_94B9_5BDB;

/// Stream selector used when only a seed is supplied
pub const DEFAULT_STREAM: u64 = 1;

/// Deterministic random number generator using PCG32
///
/// # Example
/// ```
/// use prng_engine_core_rs::{Pcg32, RandomSource};
///
/// let mut rng = Pcg32::new(12345, 1);
/// let value = rng.next_u32();
/// let die = rng.range_i32(1, 6); // [1, 6] inclusive
/// # let _ = (value, die);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPcg32")]
pub struct Pcg32 {
    /// Internal LCG state (64-bit)
    state: u64,
    /// Stream increment, always odd
    increment: u64,
}

/// Captured state as written on the wire, before the increment is forced odd
#[derive(Deserialize)]
struct RawPcg32 {
    state: u64,
    increment: u64,
}

impl From<RawPcg32> for Pcg32 {
    fn from(raw: RawPcg32) -> Self {
        Pcg32::from_parts(raw.state, raw.increment)
    }
}

impl Pcg32 {
    /// Create a new generator from a seed and a stream selector
    ///
    /// # Arguments
    /// * `seed` - Initial seed value (u64)
    /// * `stream` - Stream selector; only the low 63 bits are significant
    ///
    /// # Example
    /// ```
    /// use prng_engine_core_rs::Pcg32;
    ///
    /// let a = Pcg32::new(12345, 1);
    /// let b = Pcg32::new(12345, 1);
    /// assert_eq!(a, b);
    /// ```
    pub fn new(seed: u64, stream: u64) -> Self {
        let mut rng = Self {
            state: 0,
            increment: (stream << 1) | 1,
        };
        rng.step();
        rng.state = rng.state.wrapping_add(seed);
        rng.step();
        rng
    }

    /// Create a generator on the default stream
    ///
    /// # Example
    /// ```
    /// use prng_engine_core_rs::Pcg32;
    ///
    /// assert_eq!(Pcg32::with_seed(42), Pcg32::new(42, 1));
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, DEFAULT_STREAM)
    }

    /// Generator in the fixed, well-known unseeded state
    ///
    /// Deterministic until it is explicitly seeded.
    pub const fn unseeded() -> Self {
        Self {
            state: DEFAULT_STATE,
            increment: DEFAULT_INCREMENT,
        }
    }

    /// Create a generator whose seed and stream are drawn from the
    /// calling thread's ambient generator
    ///
    /// The result is not reproducible; use [`Pcg32::new`] for replay.
    ///
    /// # Panics
    /// Panics if called from inside an [`ambient::with`] closure.
    pub fn from_entropy() -> Self {
        let (seed, stream) = ambient::with(|rng| (rng.next_u64(), rng.next_u64()));
        Self::new(seed, stream)
    }

    /// Restore a generator from previously captured state
    ///
    /// The increment is forced odd.
    ///
    /// # Example
    /// ```
    /// use prng_engine_core_rs::{Pcg32, RandomSource};
    ///
    /// let mut rng = Pcg32::new(7, 3);
    /// rng.next_u32();
    /// let mut replay = Pcg32::from_parts(rng.state(), rng.increment());
    /// assert_eq!(rng.next_u32(), replay.next_u32());
    /// ```
    pub fn from_parts(state: u64, increment: u64) -> Self {
        Self {
            state,
            increment: increment | 1,
        }
    }

    /// Current LCG state (for checkpointing/replay)
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Stream increment (always odd)
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Advance the state and return the next 32-bit output
    ///
    /// The output permutes the old state; the new state is stored.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = old
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment | 1);
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn step(&mut self) {
        let _ = self.next_u32();
    }
}

impl RandomSource for Pcg32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Pcg32::next_u32(self)
    }
}
