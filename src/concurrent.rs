//! Shared-lock concurrency wrapper.
//!
//! One [`FastRand`] behind a [`SpinLock`], exposed through `&self` methods
//! so any number of threads can draw from the same engine. Every operation
//! acquires the lock, delegates, and releases via the guard's drop, so the
//! raw draw sequence observed across all callers is a serialization of
//! individual engine draws with no torn or duplicated state updates.
//!
//! A documented process-wide instance is available through [`shared`];
//! fixed-seed instances can be constructed directly, which keeps tests
//! deterministic.

use std::sync::LazyLock;

use crate::error::RandError;
use crate::fast_rand::FastRand;
use crate::spin_lock::SpinLock;

/// Thread-safe facility over a single shared fast engine.
pub struct ConcurrentRand {
    inner: SpinLock<FastRand>,
}

impl ConcurrentRand {
    /// Creates a facility over a time-seeded engine.
    pub fn new() -> Self {
        ConcurrentRand {
            inner: SpinLock::new(FastRand::new()),
        }
    }

    /// Creates a facility over a fixed-seed engine.
    ///
    /// # Errors
    /// [`RandError::ZeroSeed`] if `seed` is zero.
    pub fn with_seed(seed: u64) -> Result<Self, RandError> {
        Ok(ConcurrentRand {
            inner: SpinLock::new(FastRand::with_seed(seed)?),
        })
    }

    pub fn next_u32(&self) -> u32 {
        self.inner.lock().next_u32()
    }

    pub fn next_i32(&self) -> i32 {
        self.inner.lock().next_i32()
    }

    pub fn next_u64(&self) -> u64 {
        self.inner.lock().next_u64()
    }

    pub fn next_i64(&self) -> i64 {
        self.inner.lock().next_i64()
    }

    pub fn next_u8(&self) -> u8 {
        self.inner.lock().next_u8()
    }

    pub fn next_i8(&self) -> i8 {
        self.inner.lock().next_i8()
    }

    pub fn next_u16(&self) -> u16 {
        self.inner.lock().next_u16()
    }

    pub fn next_i16(&self) -> i16 {
        self.inner.lock().next_i16()
    }

    pub fn next_f64(&self) -> f64 {
        self.inner.lock().next_f64()
    }

    pub fn next_f32(&self) -> f32 {
        self.inner.lock().next_f32()
    }

    pub fn next_bool(&self) -> bool {
        self.inner.lock().next_bool()
    }

    pub fn next_bool_prob(&self, probability: f64) -> Result<bool, RandError> {
        self.inner.lock().next_bool_prob(probability)
    }

    pub fn next(&self) -> i32 {
        self.inner.lock().next()
    }

    pub fn next_max(&self, max: i32) -> Result<i32, RandError> {
        self.inner.lock().next_max(max)
    }

    pub fn next_range(&self, min: i32, max: i32) -> Result<i32, RandError> {
        self.inner.lock().next_range(min, max)
    }

    /// Fills `buffer` under a single acquisition, so the bytes come from
    /// consecutive engine draws.
    pub fn fill_bytes(&self, buffer: &mut [u8]) {
        self.inner.lock().fill_bytes(buffer)
    }

    /// Builds the whole string under a single acquisition.
    pub fn next_string(&self, alphabet: &[char], length: usize) -> Result<String, RandError> {
        self.inner.lock().next_string(alphabet, length)
    }
}

impl Default for ConcurrentRand {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED: LazyLock<ConcurrentRand> = LazyLock::new(ConcurrentRand::new);

/// The process-wide shared facility, created on first use and alive for the
/// process lifetime.
pub fn shared() -> &'static ConcurrentRand {
    &SHARED
}
