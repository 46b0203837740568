//! Deterministic random number generation
//!
//! Uses the PCG32 (XSH-RR) algorithm: a 64-bit linear congruential state
//! with a permuted 32-bit output.
//! CRITICAL: Both the ambient generator and explicit instances advance
//! through this module.

mod pcg;

pub use pcg::{Pcg32, DEFAULT_INCREMENT, DEFAULT_STATE, DEFAULT_STREAM, MULTIPLIER};
