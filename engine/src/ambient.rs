//! Ambient (thread-scoped) generator
//!
//! Each thread owns an independent [`Pcg32`], created in the fixed unseeded
//! state and seeded from [`OsEntropy`] the first time it is used. The stream
//! selector is the address of the thread's own cell, so threads seeded with
//! the same entropy still draw from different streams.
//!
//! No locking is involved; nothing here is shared between threads.
//!
//! # Example
//! ```
//! use prng_engine_core_rs::ambient;
//!
//! let coin = ambient::next_bool();
//! let loot = ambient::chance(0.25);
//! let id = ambient::uuid_string();
//! assert_eq!(id.len(), 36);
//! # let _ = (coin, loot);
//! ```

use crate::distributions::RandomSource;
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::RngError;
use crate::rng::Pcg32;
use log::debug;
use std::cell::RefCell;
use uuid::Uuid;

struct AmbientState {
    rng: Pcg32,
    seeded: bool,
}

impl AmbientState {
    const fn new() -> Self {
        Self {
            rng: Pcg32::unseeded(),
            seeded: false,
        }
    }

    fn reseed<E: EntropySource + ?Sized>(&mut self, source: &mut E, stream: u64) {
        self.rng = Pcg32::new(source.next_seed(), stream);
        self.seeded = true;
        debug!(
            "Seeded ambient generator for thread {:?}",
            std::thread::current().id()
        );
    }
}

thread_local! {
    static AMBIENT: RefCell<AmbientState> = const { RefCell::new(AmbientState::new()) };
}

fn thread_stream(cell: &RefCell<AmbientState>) -> u64 {
    cell as *const RefCell<AmbientState> as usize as u64
}

/// Run `f` against this thread's generator, seeding it first if needed
///
/// All ambient free functions go through here exactly once per call.
///
/// # Panics
/// Panics if `f` itself touches the ambient generator, including indirectly
/// through [`Pcg32::from_entropy`] or an unseeded
/// [`GeneratorConfig::build`](crate::GeneratorConfig::build).
///
/// # Example
/// ```
/// use prng_engine_core_rs::{ambient, RandomSource};
///
/// let (a, b) = ambient::with(|rng| (rng.range_i32(1, 6), rng.range_i32(1, 6)));
/// assert!((1..=6).contains(&a) && (1..=6).contains(&b));
/// ```
pub fn with<F, T>(f: F) -> T
where
    F: FnOnce(&mut Pcg32) -> T,
{
    AMBIENT.with(|cell| {
        let stream = thread_stream(cell);
        let Ok(mut ambient) = cell.try_borrow_mut() else {
            panic!("ambient generator used re-entrantly from inside ambient::with");
        };
        if !ambient.seeded {
            ambient.reseed(&mut OsEntropy, stream);
        }
        f(&mut ambient.rng)
    })
}

/// Re-seed this thread's generator from OS entropy
pub fn seed() {
    seed_from(&mut OsEntropy);
}

/// Re-seed this thread's generator from `source`
///
/// Unconditional: replaces any previous state.
pub fn seed_from<E: EntropySource + ?Sized>(source: &mut E) {
    AMBIENT.with(|cell| {
        let stream = thread_stream(cell);
        cell.borrow_mut().reseed(source, stream);
    });
}

/// Whether this thread's generator has been seeded yet
pub fn is_seeded() -> bool {
    AMBIENT.with(|cell| cell.borrow().seeded)
}

/// Copy of this thread's generator, or `None` before it is seeded
///
/// Does not trigger seeding.
pub fn state() -> Option<Pcg32> {
    AMBIENT.with(|cell| {
        let ambient = cell.borrow();
        ambient.seeded.then(|| ambient.rng.clone())
    })
}

pub fn next_u32() -> u32 {
    with(|rng| rng.next_u32())
}

pub fn next_u64() -> u64 {
    with(|rng| rng.next_u64())
}

/// Float in [0.0, 1.0)
pub fn next_f32() -> f32 {
    with(|rng| rng.next_f32())
}

/// Double in [0.0, 1.0)
pub fn next_f64() -> f64 {
    with(|rng| rng.next_f64())
}

pub fn next_bool() -> bool {
    with(|rng| rng.next_bool())
}

/// Integer in [min, max]; `min` when `min >= max`
pub fn range_i32(min: i32, max: i32) -> i32 {
    with(|rng| rng.range_i32(min, max))
}

/// Float in [min, max)
pub fn range_f32(min: f32, max: f32) -> f32 {
    with(|rng| rng.range_f32(min, max))
}

/// True with probability `p`
pub fn chance(p: f64) -> bool {
    with(|rng| rng.chance(p))
}

pub fn gaussian(mean: f64, stddev: f64) -> f64 {
    with(|rng| rng.gaussian(mean, stddev))
}

pub fn fill_bytes(dest: &mut [u8]) {
    with(|rng| rng.fill_bytes(dest))
}

pub fn fill_alphanumeric(dest: &mut [u8]) {
    with(|rng| rng.fill_alphanumeric(dest))
}

pub fn alphanumeric_string(len: usize) -> String {
    with(|rng| rng.alphanumeric_string(len))
}

pub fn uuid_v4() -> Uuid {
    with(|rng| rng.uuid_v4())
}

/// Hyphenated lowercase UUID v4 (36 characters)
pub fn uuid_string() -> String {
    with(|rng| rng.uuid_string())
}

pub fn shuffle<T>(items: &mut [T]) {
    with(|rng| rng.shuffle(items))
}

/// Uniformly chosen element of `items`
///
/// # Errors
/// [`RngError::EmptySequence`] when `items` is empty.
pub fn choice<T>(items: &[T]) -> Result<&T, RngError> {
    with(|rng| rng.choice(items))
}
