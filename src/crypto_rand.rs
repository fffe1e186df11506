//! Cryptographically secure random engine.
//!
//! Derives the same typed surface as the fast engine from an opaque
//! [`EntropySource`], using rejection sampling over freshly fetched byte
//! buffers instead of bit tricks. Every draw requests exactly the number of
//! bytes the output width needs and assembles them little-endian.
//!
//! Bounded draws re-request fresh bytes on every rejected attempt, so a
//! rejection costs another round-trip into the source. That is a
//! performance caveat only; the distribution is unaffected.

use crate::derive;
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::RandError;
use crate::text;

/// Secure random engine over a platform byte source.
///
/// The source is owned and released deterministically: dropping the engine
/// releases it on every exit path, and [`close`](Self::close) makes the
/// release point explicit. A single instance is not thread-safe.
pub struct CryptoRand {
    source: Box<dyn EntropySource>,
}

impl CryptoRand {
    /// Creates an engine over the operating-system source.
    pub fn new() -> Self {
        Self::with_source(Box::new(OsEntropy))
    }

    /// Creates an engine over a caller-supplied source.
    pub fn with_source(source: Box<dyn EntropySource>) -> Self {
        CryptoRand { source }
    }

    /// Releases the secure source now.
    ///
    /// Dropping the engine has the same effect; this form marks the release
    /// point in code. Consuming `self` makes a double release
    /// unrepresentable.
    pub fn close(self) {}

    /// Fetches exactly `N` fresh bytes from the source.
    fn fetch<const N: usize>(&mut self) -> Result<[u8; N], RandError> {
        let mut buf = [0u8; N];
        self.source.fill(&mut buf)?;
        Ok(buf)
    }

    pub fn next_u8(&mut self) -> Result<u8, RandError> {
        Ok(self.fetch::<1>()?[0])
    }

    pub fn next_i8(&mut self) -> Result<i8, RandError> {
        Ok(self.next_u8()? as i8)
    }

    pub fn next_u16(&mut self) -> Result<u16, RandError> {
        Ok(u16::from_le_bytes(self.fetch::<2>()?))
    }

    pub fn next_i16(&mut self) -> Result<i16, RandError> {
        Ok(self.next_u16()? as i16)
    }

    pub fn next_u32(&mut self) -> Result<u32, RandError> {
        Ok(u32::from_le_bytes(self.fetch::<4>()?))
    }

    pub fn next_i32(&mut self) -> Result<i32, RandError> {
        Ok(self.next_u32()? as i32)
    }

    pub fn next_u64(&mut self) -> Result<u64, RandError> {
        Ok(u64::from_le_bytes(self.fetch::<8>()?))
    }

    pub fn next_i64(&mut self) -> Result<i64, RandError> {
        Ok(self.next_u64()? as i64)
    }

    /// Random double in [0.0, 1.0) from 8 secure bytes.
    ///
    /// Normalizes by division; redraws only in the exact-1.0 edge case.
    pub fn next_f64(&mut self) -> Result<f64, RandError> {
        loop {
            let i = u64::from_le_bytes(self.fetch::<8>()?);
            let d = i as f64 / u64::MAX as f64;
            if d < 1.0 {
                return Ok(d);
            }
        }
    }

    /// Random float in [0.0, 1.0).
    ///
    /// Narrowing can round a double just below 1.0 up to exactly 1.0f32;
    /// such results are rejected and redrawn.
    pub fn next_f32(&mut self) -> Result<f32, RandError> {
        loop {
            let d = self.next_f64()? as f32;
            if d < 1.0 {
                return Ok(d);
            }
        }
    }

    /// Fair coin flip.
    pub fn next_bool(&mut self) -> Result<bool, RandError> {
        self.next_bool_prob(0.5)
    }

    /// True with the given probability.
    ///
    /// # Errors
    /// [`RandError::ProbabilityOutOfRange`] unless `probability` is in
    /// [0.0, 1.0].
    pub fn next_bool_prob(&mut self, probability: f64) -> Result<bool, RandError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(RandError::ProbabilityOutOfRange);
        }
        Ok(self.next_f64()? >= 1.0 - probability)
    }

    /// Non-negative random integer in [0, `i32::MAX`).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<i32, RandError> {
        self.next_range(0, i32::MAX)
    }

    /// Random integer in [0, `max`). `max == 0` returns 0.
    ///
    /// # Errors
    /// [`RandError::MaxNegative`] if `max` is negative.
    pub fn next_max(&mut self, max: i32) -> Result<i32, RandError> {
        if max < 0 {
            return Err(RandError::MaxNegative);
        }
        self.next_range(0, max)
    }

    /// Random integer in [`min`, `max`). `min == max` returns `min`
    /// without fetching.
    ///
    /// Each rejected attempt fetches 4 fresh bytes from the source.
    ///
    /// # Errors
    /// [`RandError::BoundsReversed`] if `max < min`;
    /// [`RandError::EntropyUnavailable`] if the source fails mid-draw.
    pub fn next_range(&mut self, min: i32, max: i32) -> Result<i32, RandError> {
        if max < min {
            return Err(RandError::BoundsReversed);
        }
        if max == min {
            return Ok(min);
        }
        loop {
            let raw = u32::from_le_bytes(self.fetch::<4>()?);
            let val = derive::scale_to_range(raw, min, max);
            if val < i64::from(max) {
                return Ok(val as i32);
            }
            // Rounding landed exactly on max; fetch fresh bytes.
        }
    }

    /// Fills `buffer` with secure random bytes in one source request.
    pub fn fill_bytes(&mut self, buffer: &mut [u8]) -> Result<(), RandError> {
        self.source.fill(buffer)
    }

    /// Random string of exactly `length` characters drawn from `alphabet`.
    ///
    /// # Errors
    /// [`RandError::EmptyAlphabet`] if `alphabet` is empty;
    /// [`RandError::AlphabetTooLarge`] if its length exceeds `i32::MAX`;
    /// [`RandError::EntropyUnavailable`] if the source fails mid-draw.
    pub fn next_string(&mut self, alphabet: &[char], length: usize) -> Result<String, RandError> {
        text::next_string_with(alphabet, length, |bound| self.next_range(0, bound))
    }
}

impl Default for CryptoRand {
    fn default() -> Self {
        Self::new()
    }
}
