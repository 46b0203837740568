//! PRNG Engine Core - Rust Engine
//!
//! Deterministic pseudo-random number generation with an ambient
//! (implicitly seeded, per-thread) generator and explicit, independently
//! seedable instances.
//!
//! # Architecture
//!
//! - **rng**: PCG32 bit generator core and instance construction
//! - **distributions**: Derived distributions (ranges, floats, bytes, UUIDs, shuffle, Gaussian)
//! - **ambient**: Thread-scoped generator, lazily seeded from entropy
//! - **entropy**: OS entropy source with a time-based fallback
//! - **config**: Serde-loadable generator configuration
//!
//! # Critical Invariants
//!
//! 1. Equal (seed, stream) pairs produce bit-identical sequences
//! 2. The stream increment is always odd
//! 3. Ambient and explicit paths run the exact same algorithms
//!
//! NOT cryptographically secure.
//!
//! # Example
//! ```
//! use prng_engine_core_rs::{ambient, Pcg32, RandomSource};
//!
//! // Ambient: no setup required
//! let roll = ambient::range_i32(1, 6);
//! assert!((1..=6).contains(&roll));
//!
//! // Explicit: reproducible
//! let mut a = Pcg32::new(12345, 1);
//! let mut b = Pcg32::new(12345, 1);
//! assert_eq!(a.next_u32(), b.next_u32());
//! ```

// Module declarations
pub mod ambient;
pub mod config;
pub mod distributions;
pub mod entropy;
pub mod error;
pub mod rng;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use distributions::{CachedGaussian, RandomSource, ALPHANUMERIC, UUID_LENGTH};
pub use entropy::{EntropySource, FixedEntropy, OsEntropy};
pub use error::RngError;
pub use rng::Pcg32;
