//! Entropy sources for seeding
//!
//! The OS source is read only when an ambient generator is first used in a
//! thread or explicitly re-seeded. Failure is never fatal: it degrades to a
//! time-based seed and logs a warning.

use log::warn;
use std::fmt::Display;
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies 64-bit seed material
pub trait EntropySource {
    fn next_seed(&mut self) -> u64;
}

/// Operating system entropy with a time-based fallback
///
/// # Example
/// ```
/// use prng_engine_core_rs::{EntropySource, OsEntropy};
///
/// let seed = OsEntropy.next_seed();
/// # let _ = seed;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_seed(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        let filled = getrandom::getrandom(&mut buf).map(|()| buf);
        seed_or_fallback(filled, time_fallback_seed)
    }
}

/// Decode a filled seed buffer, or log the failure and use `fallback`
fn seed_or_fallback<E, F>(filled: Result<[u8; 8], E>, fallback: F) -> u64
where
    E: Display,
    F: FnOnce() -> u64,
{
    match filled {
        Ok(buf) => u64::from_ne_bytes(buf),
        Err(err) => {
            warn!("OS entropy unavailable ({err}); falling back to time-based seed");
            fallback()
        }
    }
}

/// Always returns the same seed
///
/// Makes ambient seeding reproducible in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedEntropy(pub u64);

impl EntropySource for FixedEntropy {
    fn next_seed(&mut self) -> u64 {
        self.0
    }
}

/// Wall-clock nanoseconds mixed with a stack address
///
/// A clock before the Unix epoch contributes zero rather than failing.
pub fn time_fallback_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let marker = 0u8;
    let addr = &marker as *const u8 as usize as u64;
    nanos ^ addr.rotate_left(32)
}
