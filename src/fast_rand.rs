//! Lehmer fast pseudorandom engine.
//!
//! The entire generator state is one 64-bit word, advanced by a single
//! wrapping multiplication per draw; the top 32 bits of the new state are
//! the raw output. This is several times faster than a general-purpose
//! generator while still passing standard statistical test batteries.
//!
//! Not cryptographically secure: the state is fully recoverable from two
//! outputs, and the default time-derived seed is guessable. Use
//! [`CryptoRand`](crate::CryptoRand) when unpredictability matters.

use crate::derive;
use crate::error::RandError;
use crate::seed;
use crate::text;

/// Multiplier of the multiplicative congruential step. Fixed odd constant;
/// the raw output is the upper half of the product.
const LEHMER_CONST: u64 = 0xDA94_2042_E4DD_58B5;

/// Fast non-cryptographic pseudorandom generator.
///
/// Instances are cheap to create and deterministic for a fixed seed:
/// two engines built with the same nonzero seed produce identical
/// sequences. A single instance is not thread-safe; share one through
/// [`ConcurrentRand`](crate::ConcurrentRand) or use per-thread engines via
/// [`thread_rand`](crate::thread_rand) instead.
pub struct FastRand {
    state: u64,
}

impl FastRand {
    /// Creates an engine seeded from the system clock.
    ///
    /// See [`crate::seed`]'s caveat: time-derived seeding reduces collisions
    /// between rapidly-created instances but is not security-grade.
    pub fn new() -> Self {
        FastRand {
            state: seed::time_seed(),
        }
    }

    /// Creates an engine with a fixed, deterministic seed.
    ///
    /// # Errors
    /// [`RandError::ZeroSeed`] if `seed` is zero: a zero state is an
    /// absorbing fixed point and would make every output zero.
    pub fn with_seed(seed: u64) -> Result<Self, RandError> {
        if seed == 0 {
            return Err(RandError::ZeroSeed);
        }
        Ok(FastRand { state: seed })
    }

    /// Raw 32-bit draw: one multiply, one shift.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(LEHMER_CONST);
        (self.state >> 32) as u32
    }

    #[inline]
    pub fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    /// Raw 64-bit draw: two 32-bit draws, first low half then high half.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let low = self.next_u32();
        let high = self.next_u32();
        derive::join_u32(high, low)
    }

    #[inline]
    pub fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }

    #[inline]
    pub fn next_u8(&mut self) -> u8 {
        self.next_u32() as u8
    }

    #[inline]
    pub fn next_i8(&mut self) -> i8 {
        self.next_u32() as i8
    }

    #[inline]
    pub fn next_u16(&mut self) -> u16 {
        self.next_u32() as u16
    }

    #[inline]
    pub fn next_i16(&mut self) -> i16 {
        self.next_u32() as i16
    }

    /// Random double in [0.0, 1.0) with full mantissa precision.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        derive::f64_from_bits(self.next_u64())
    }

    /// Random float in [0.0, 1.0).
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        derive::f32_from_bits(self.next_u32())
    }

    /// Fair coin flip.
    #[inline]
    pub fn next_bool(&mut self) -> bool {
        self.next_f64() >= 0.5
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
        Ok(self.next_f64() >= 1.0 - probability)
    }

    /// Non-negative random integer in [0, `i32::MAX`).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> i32 {
        self.bounded(0, i32::MAX)
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
    /// without drawing.
    ///
    /// # Errors
    /// [`RandError::BoundsReversed`] if `max < min`.
    pub fn next_range(&mut self, min: i32, max: i32) -> Result<i32, RandError> {
        if max < min {
            return Err(RandError::BoundsReversed);
        }
        if max == min {
            return Ok(min);
        }
        Ok(self.bounded(min, max))
    }

    /// Bounded draw with the strict `< max` rejection. Caller guarantees
    /// `min < max`.
    fn bounded(&mut self, min: i32, max: i32) -> i32 {
        loop {
            let val = derive::scale_to_range(self.next_u32(), min, max);
            if val < i64::from(max) {
                return val as i32;
            }
            // Rounding landed exactly on max; redraw.
        }
    }

    /// Fills `buffer` with random bytes, one raw 32-bit draw per 4 bytes.
    pub fn fill_bytes(&mut self, buffer: &mut [u8]) {
        let mut chunks = buffer.chunks_exact_mut(4);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u32().to_le_bytes());
        }
        let rest = chunks.into_remainder();
        if !rest.is_empty() {
            let bytes = self.next_u32().to_le_bytes();
            rest.copy_from_slice(&bytes[..rest.len()]);
        }
    }

    /// Random string of exactly `length` characters drawn from `alphabet`.
    ///
    /// # Errors
    /// [`RandError::EmptyAlphabet`] if `alphabet` is empty;
    /// [`RandError::AlphabetTooLarge`] if its length exceeds `i32::MAX`.
    pub fn next_string(&mut self, alphabet: &[char], length: usize) -> Result<String, RandError> {
        text::next_string_with(alphabet, length, |bound| Ok(self.bounded(0, bound)))
    }
}

impl Default for FastRand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_rejected() {
        assert_eq!(FastRand::with_seed(0).err(), Some(RandError::ZeroSeed));
    }

    #[test]
    fn test_frozen_sequence_seed_1() {
        // Fixed by the algorithm: state_n = C^n mod 2^64, output = top 32 bits.
        let mut rng = FastRand::with_seed(1).unwrap();
        let expected: [u32; 6] = [
            0xDA94_2042,
            0xFA32_02B8,
            0xBDFB_BE12,
            0x6F73_F57F,
            0x5DF7_11CB,
            0x5F49_D96C,
        ];
        for (i, &exp) in expected.iter().enumerate() {
            assert_eq!(rng.next_u32(), exp, "raw draw {} diverged", i);
        }
    }

    #[test]
    fn test_frozen_sequence_seed_12345() {
        let mut rng = FastRand::with_seed(12345).unwrap();
        let expected: [u32; 6] = [
            0x7107_B9CE,
            0x15A5_3BFA,
            0x80B0_C89A,
            0x8ED9_9390,
            0x3F59_34CC,
            0x1035_D587,
        ];
        for (i, &exp) in expected.iter().enumerate() {
            assert_eq!(rng.next_u32(), exp, "raw draw {} diverged", i);
        }
    }

    #[test]
    fn test_next_u64_combines_low_then_high() {
        // First 32-bit draw is the low half, second the high half.
        let mut rng = FastRand::with_seed(0x2545_F491_4F6C_DD1D).unwrap();
        assert_eq!(rng.next_u64(), 0x927E_58D9_8F2F_056D);
    }

    #[test]
    fn test_equal_seeds_equal_sequences() {
        let mut a = FastRand::with_seed(77).unwrap();
        let mut b = FastRand::with_seed(77).unwrap();
        for _ in 0..1000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_different_seeds_diverge_immediately() {
        let mut a = FastRand::with_seed(1).unwrap();
        let mut b = FastRand::with_seed(2).unwrap();
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_next_f64_range() {
        let mut rng = FastRand::with_seed(42).unwrap();
        for _ in 0..10_000 {
            let d = rng.next_f64();
            assert!((0.0..1.0).contains(&d), "next_f64 out of range: {}", d);
        }
    }

    #[test]
    fn test_next_f32_range() {
        let mut rng = FastRand::with_seed(42).unwrap();
        for _ in 0..10_000 {
            let d = rng.next_f32();
            assert!((0.0..1.0).contains(&d), "next_f32 out of range: {}", d);
        }
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = FastRand::with_seed(42).unwrap();
        for _ in 0..100_000 {
            let v = rng.next_range(-17, 23).unwrap();
            assert!((-17..23).contains(&v), "next_range out of range: {}", v);
        }
    }

    #[test]
    fn test_next_range_collapsed_bounds() {
        let mut rng = FastRand::with_seed(42).unwrap();
        assert_eq!(rng.next_range(9, 9).unwrap(), 9);
        // The state must not advance on a collapsed range.
        let mut fresh = FastRand::with_seed(42).unwrap();
        assert_eq!(rng.next_u32(), fresh.next_u32());
    }

    #[test]
    fn test_next_range_reversed_bounds() {
        let mut rng = FastRand::with_seed(42).unwrap();
        assert_eq!(rng.next_range(5, 4).err(), Some(RandError::BoundsReversed));
    }

    #[test]
    fn test_next_max_negative() {
        let mut rng = FastRand::with_seed(42).unwrap();
        assert_eq!(rng.next_max(-1).err(), Some(RandError::MaxNegative));
    }

    #[test]
    fn test_next_max_zero_returns_zero() {
        let mut rng = FastRand::with_seed(42).unwrap();
        assert_eq!(rng.next_max(0).unwrap(), 0);
    }

    #[test]
    fn test_next_non_negative() {
        let mut rng = FastRand::with_seed(42).unwrap();
        for _ in 0..10_000 {
            let v = rng.next();
            assert!((0..i32::MAX).contains(&v));
        }
    }

    #[test]
    fn test_next_bool_prob_out_of_range() {
        let mut rng = FastRand::with_seed(42).unwrap();
        assert_eq!(
            rng.next_bool_prob(1.5).err(),
            Some(RandError::ProbabilityOutOfRange)
        );
        assert_eq!(
            rng.next_bool_prob(-0.1).err(),
            Some(RandError::ProbabilityOutOfRange)
        );
    }

    #[test]
    fn test_next_bool_prob_degenerate() {
        let mut rng = FastRand::with_seed(42).unwrap();
        for _ in 0..1000 {
            assert!(rng.next_bool_prob(1.0).unwrap());
            assert!(!rng.next_bool_prob(0.0).unwrap());
        }
    }

    #[test]
    fn test_fill_bytes_remainder_lengths() {
        let mut rng = FastRand::with_seed(42).unwrap();
        for len in 0..16 {
            let mut buf = vec![0u8; len];
            rng.fill_bytes(&mut buf);
            if len >= 8 {
                // A run of zeros across 8+ random bytes is practically
                // impossible with a fixed, known-good seed.
                assert!(buf.iter().any(|&b| b != 0), "len {} all zero", len);
            }
        }
    }

    #[test]
    fn test_fill_bytes_deterministic() {
        let mut a = FastRand::with_seed(7).unwrap();
        let mut b = FastRand::with_seed(7).unwrap();
        let mut buf_a = [0u8; 33];
        let mut buf_b = [0u8; 33];
        a.fill_bytes(&mut buf_a);
        b.fill_bytes(&mut buf_b);
        assert_eq!(buf_a, buf_b);
    }

    #[test]
    fn test_next_string_properties() {
        let alphabet: Vec<char> = "abcdef".chars().collect();
        let mut rng = FastRand::with_seed(42).unwrap();
        let s = rng.next_string(&alphabet, 64).unwrap();
        assert_eq!(s.chars().count(), 64);
        assert!(s.chars().all(|c| alphabet.contains(&c)));
        assert_eq!(rng.next_string(&alphabet, 0).unwrap(), "");
        assert_eq!(
            rng.next_string(&[], 3).err(),
            Some(RandError::EmptyAlphabet)
        );
    }
}
