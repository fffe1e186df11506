//! Time-derived default seeding for the fast engine.
//!
//! Two independent 32-bit clock readings fill the full 64-bit state word so
//! that instances created within the same millisecond still diverge. This
//! is collision *reduction*, not collision proofing, and it is in no way
//! adequate for security-sensitive use; callers needing unpredictable seeds
//! should seed from [`CryptoRand`](crate::CryptoRand) instead.

use std::time::{SystemTime, UNIX_EPOCH};

/// Used when the system clock is unavailable or yields a zero seed.
/// Arbitrary odd value.
const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Builds a nonzero 64-bit seed from the wall clock.
pub(crate) fn time_seed() -> u64 {
    let (millis, nanos) = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => (d.as_millis() as u32, d.subsec_nanos()),
        Err(_) => return FALLBACK_SEED,
    };
    let seed = u64::from(millis) | (u64::from(nanos.wrapping_add(10)) << 32);
    if seed == 0 {
        FALLBACK_SEED
    } else {
        seed
    }
}
