//! Derived distributions and utilities
//!
//! Everything here is expressed in terms of a single 32-bit draw, so the
//! ambient generator and explicit [`Pcg32`](crate::Pcg32) instances share one
//! implementation.
//!
//! # Critical Invariants
//!
//! - **No modulo bias**: bounded integer ranges use rejection sampling
//! - **Half-open floats**: `next_f32`/`next_f64` never return 1.0
//! - **Platform-independent bytes**: draws are written little-endian

use crate::error::RngError;
use uuid::Uuid;

/// Alphabet used for alphanumeric strings
pub const ALPHANUMERIC: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a hyphenated UUID string (8-4-4-4-12)
pub const UUID_LENGTH: usize = uuid::fmt::Hyphenated::LENGTH;

const F32_SCALE: f32 = 1.0 / 16_777_216.0; // 2^-24
const F64_SCALE: f64 = 1.0 / 9_007_199_254_740_992.0; // 2^-53

/// Source of random 32-bit words plus every distribution derived from it
///
/// Implementors supply [`RandomSource::next_u32`]; all other methods are
/// provided.
///
/// # Example
/// ```
/// use prng_engine_core_rs::{Pcg32, RandomSource};
///
/// let mut rng = Pcg32::new(99, 1);
/// let x = rng.next_f64();
/// assert!((0.0..1.0).contains(&x));
///
/// let mut deck: Vec<u8> = (0..52).collect();
/// rng.shuffle(&mut deck);
/// assert_eq!(deck.len(), 52);
/// ```
pub trait RandomSource {
    /// Next raw 32-bit output
    fn next_u32(&mut self) -> u32;

    /// Two 32-bit draws concatenated, first draw in the high word
    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    /// Float in [0.0, 1.0) with 24 bits of resolution
    fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * F32_SCALE
    }

    /// Double in [0.0, 1.0) with 53 bits of resolution
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * F64_SCALE
    }

    /// Least significant bit of a 32-bit draw
    fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }

    /// Uniform integer in [min, max] (inclusive)
    ///
    /// Returns `min` without drawing when `min >= max`.
    ///
    /// # Example
    /// ```
    /// use prng_engine_core_rs::{Pcg32, RandomSource};
    ///
    /// let mut rng = Pcg32::new(1, 1);
    /// let roll = rng.range_i32(1, 6);
    /// assert!((1..=6).contains(&roll));
    /// assert_eq!(rng.range_i32(5, 5), 5);
    /// assert_eq!(rng.range_i32(9, 3), 9);
    /// ```
    fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = bounded_u32(self, span);
        (i64::from(min) + offset as i64) as i32
    }

    /// Uniform index in [0, max] (inclusive)
    ///
    /// Same rejection scheme as [`RandomSource::range_i32`]; spans wider than
    /// 2^32 switch to 64-bit draws.
    fn index_inclusive(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        let max = max as u64;
        if max <= u64::from(u32::MAX) {
            bounded_u32(self, max + 1) as usize
        } else {
            bounded_u64(self, u128::from(max) + 1) as usize
        }
    }

    /// Float in [min, max)
    ///
    /// Inherits the 24-bit resolution of [`RandomSource::next_f32`] and is not
    /// bias corrected. For some spans the product rounds up to `max`.
    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// True with probability `p`
    ///
    /// `p <= 0.0` is always false, `p > 1.0` always true.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Normally distributed sample (polar Box-Muller)
    ///
    /// The companion value of each accepted point is discarded; see
    /// [`CachedGaussian`] for the variant that keeps it.
    fn gaussian(&mut self, mean: f64, stddev: f64) -> f64 {
        let (u, _, factor) = polar_point(self);
        mean + stddev * u * factor
    }

    /// Fill `dest` with random bytes, four per draw
    ///
    /// A trailing 1-3 bytes take the low-order prefix of one extra draw.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(4);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u32().to_le_bytes());
        }
        let rest = chunks.into_remainder();
        if !rest.is_empty() {
            let word = self.next_u32().to_le_bytes();
            let len = rest.len();
            rest.copy_from_slice(&word[..len]);
        }
    }

    /// Fill `dest` with ASCII characters from [`ALPHANUMERIC`]
    ///
    /// Uses plain modulo; fine for identifiers, not for provable uniformity.
    fn fill_alphanumeric(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = alphanumeric_char(self);
        }
    }

    /// Owned alphanumeric string of `len` characters
    fn alphanumeric_string(&mut self, len: usize) -> String {
        (0..len).map(|_| char::from(alphanumeric_char(self))).collect()
    }

    /// Random (version 4, RFC 4122 variant) UUID
    fn uuid_v4(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.fill_bytes(&mut bytes);
        // Sets the version nibble of byte 6 and the variant bits of byte 8
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }

    /// UUID v4 rendered as 36 lowercase hex characters with hyphens
    ///
    /// # Example
    /// ```
    /// use prng_engine_core_rs::{Pcg32, RandomSource};
    ///
    /// let id = Pcg32::new(5, 5).uuid_string();
    /// assert_eq!(id.len(), 36);
    /// assert_eq!(&id[14..15], "4");
    /// ```
    fn uuid_string(&mut self) -> String {
        self.uuid_v4().hyphenated().to_string()
    }

    /// Render a UUID v4 into a caller-provided buffer without allocating
    fn write_uuid<'a>(&mut self, buf: &'a mut [u8; UUID_LENGTH]) -> &'a str {
        let id = self.uuid_v4();
        id.hyphenated().encode_lower(buf)
    }

    /// Fisher-Yates shuffle in place
    ///
    /// Slices of length 0 or 1 are left untouched and consume no draws.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index_inclusive(i);
            items.swap(i, j);
        }
    }

    /// Uniformly chosen element of `items`
    ///
    /// # Errors
    /// [`RngError::EmptySequence`] when `items` is empty.
    fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, RngError> {
        if items.is_empty() {
            return Err(RngError::EmptySequence);
        }
        let idx = self.index_inclusive(items.len() - 1);
        Ok(&items[idx])
    }
}

/// Uniform value in [0, span) for 2 <= span <= 2^32
fn bounded_u32<R: RandomSource + ?Sized>(rng: &mut R, span: u64) -> u64 {
    let bucket = (1u64 << 32) / span;
    let threshold = bucket * span;
    loop {
        let x = u64::from(rng.next_u32());
        if x < threshold {
            return x / bucket;
        }
    }
}

/// Uniform value in [0, span) for 2^32 < span <= 2^64
fn bounded_u64<R: RandomSource + ?Sized>(rng: &mut R, span: u128) -> u64 {
    let bucket = (1u128 << 64) / span;
    let threshold = bucket * span;
    loop {
        let x = u128::from(rng.next_u64());
        if x < threshold {
            return (x / bucket) as u64;
        }
    }
}

fn alphanumeric_char<R: RandomSource + ?Sized>(rng: &mut R) -> u8 {
    ALPHANUMERIC[(rng.next_u32() % ALPHANUMERIC.len() as u32) as usize]
}

/// Accepted point (u, v) inside the unit disk and its polar scale factor
fn polar_point<R: RandomSource + ?Sized>(rng: &mut R) -> (f64, f64, f64) {
    loop {
        let u = 2.0 * rng.next_f64() - 1.0;
        let v = 2.0 * rng.next_f64() - 1.0;
        let s = u * u + v * v;
        if s < 1.0 && s != 0.0 {
            return (u, v, (-2.0 * s.ln() / s).sqrt());
        }
    }
}

/// Gaussian sampler that keeps the second Box-Muller value
///
/// Each accepted point yields two independent standard normals; the second
/// is stored and returned (scaled by that call's mean and stddev) on the
/// next call, halving the number of draws. The stored value belongs to
/// whichever generator produced it, so use one sampler per generator.
///
/// # Example
/// ```
/// use prng_engine_core_rs::{CachedGaussian, Pcg32};
///
/// let mut rng = Pcg32::new(3, 1);
/// let mut normal = CachedGaussian::new();
/// let a = normal.sample(&mut rng, 0.0, 1.0);
/// assert!(normal.has_spare());
/// let b = normal.sample(&mut rng, 0.0, 1.0);
/// assert!(!normal.has_spare());
/// # let _ = (a, b);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CachedGaussian {
    spare: Option<f64>,
}

impl CachedGaussian {
    /// Sampler with no stored value
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next [`CachedGaussian::sample`] will skip the generator
    pub fn has_spare(&self) -> bool {
        self.spare.is_some()
    }

    /// Drop any stored value
    pub fn clear(&mut self) {
        self.spare = None;
    }

    /// Normally distributed sample with the given mean and stddev
    ///
    /// Returns the stored companion value when there is one, otherwise runs
    /// the polar rejection loop and stores the second value. The stored
    /// value is a standard normal; `mean` and `stddev` are applied on the
    /// call that consumes it.
    pub fn sample<R: RandomSource + ?Sized>(&mut self, rng: &mut R, mean: f64, stddev: f64) -> f64 {
        if let Some(z) = self.spare.take() {
            return mean + stddev * z;
        }
        let (u, v, factor) = polar_point(rng);
        self.spare = Some(v * factor);
        mean + stddev * u * factor
    }
}
