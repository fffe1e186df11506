//! Secure byte sources.
//!
//! [`EntropySource`] is the narrow seam between [`CryptoRand`](crate::CryptoRand)
//! and the platform cryptographic generator. [`OsEntropy`] is the production
//! implementation; tests inject deterministic or failing sources instead.

use crate::error::RandError;

/// A provider of cryptographically secure bytes.
///
/// A request may block on the underlying entropy pool. Failures are
/// reported, never retried at this layer.
pub trait EntropySource {
    /// Fills `dest` entirely with secure random bytes.
    ///
    /// # Errors
    /// [`RandError::EntropyUnavailable`] if the source cannot satisfy the
    /// request. `dest` must be treated as unusable afterwards.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), RandError>;
}

/// Operating-system entropy via the `getrandom` crate (`getrandom(2)` on
/// Linux, platform equivalents elsewhere).
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        getrandom::fill(dest).map_err(|e| RandError::EntropyUnavailable(e.to_string()))
    }
}
