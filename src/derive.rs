//! Pure bit-pattern derivations shared by every engine.
//!
//! All typed outputs are built from raw unsigned 32/64-bit draws. The float
//! constructions force the IEEE-754 exponent so the pattern represents a
//! value in [1.0, 2.0) with a full random mantissa, then subtract 1.0;
//! this keeps full mantissa precision and needs no division.

/// Forces the f64 exponent field to 1023 (value range [1.0, 2.0)).
const F64_EXPONENT_ONE: u64 = 0x3FF0_0000_0000_0000;
/// Keeps the mantissa, clears the sign and the top exponent bit.
const F64_MANTISSA_KEEP: u64 = 0x3FFF_FFFF_FFFF_FFFF;
/// 32-bit counterparts of the masks above.
const F32_EXPONENT_ONE: u32 = 0x3F80_0000;
const F32_MANTISSA_KEEP: u32 = 0x3FFF_FFFF;

/// Concatenates two independent 32-bit draws into a 64-bit value.
#[inline]
pub(crate) fn join_u32(high: u32, low: u32) -> u64 {
    (u64::from(high) << 32) | u64::from(low)
}

/// Derives an f64 in [0, 1) from a raw 64-bit pattern.
///
/// The masking makes a 2.0 result unrepresentable, so no rejection is
/// needed: the exponent field is exactly 1023 after `| F64_EXPONENT_ONE`
/// and `& F64_MANTISSA_KEEP`.
#[inline]
pub(crate) fn f64_from_bits(raw: u64) -> f64 {
    let bits = (raw | F64_EXPONENT_ONE) & F64_MANTISSA_KEEP;
    let d = f64::from_bits(bits);
    debug_assert!((1.0..2.0).contains(&d));
    d - 1.0
}

/// Derives an f32 in [0, 1) from a raw 32-bit pattern.
#[inline]
pub(crate) fn f32_from_bits(raw: u32) -> f32 {
    let bits = (raw | F32_EXPONENT_ONE) & F32_MANTISSA_KEEP;
    let d = f32::from_bits(bits);
    debug_assert!((1.0..2.0).contains(&d));
    d - 1.0
}

/// Scales a raw 32-bit draw into `[min, max)` by normalize-and-truncate.
///
/// Returns an `i64` so the caller can apply the strict `< max` rejection:
/// floating-point rounding can land exactly on `max` in rare cases, and the
/// engines redraw when it does. The span is computed in `i64` so the full
/// `i32` range cannot overflow.
#[inline]
pub(crate) fn scale_to_range(raw: u32, min: i32, max: i32) -> i64 {
    let span = i64::from(max) - i64::from(min);
    let d = f64::from(raw) / f64::from(u32::MAX);
    i64::from(min) + (d * span as f64) as i64
}
