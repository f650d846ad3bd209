use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// within the exactly representable range, and not fractional.
///
/// ## Returns
/// - `Some(u64)`: The converted value if safe.
/// - `None`: For NaN, infinities, negative, fractional or too large values.
///
/// # Example
/// ```
/// use boredcalc::util::num::{MAX_SAFE_U64_INT, f64_to_u64_checked};
///
/// assert_eq!(f64_to_u64_checked(7.0), Some(7));
/// assert_eq!(f64_to_u64_checked(-5.0), None);
/// assert_eq!(f64_to_u64_checked(1.23), None);
/// assert_eq!(f64_to_u64_checked(f64::NAN), None);
/// assert_eq!(f64_to_u64_checked((MAX_SAFE_U64_INT as f64) * 2.0), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_u64_checked(value: f64) -> Option<u64> {
    if !value.is_finite() {
        return None;
    }
    if value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    if value.fract() != 0.0 {
        return None;
    }
    Some(value as u64)
}

/// Narrows an arbitrary-precision integer to the nearest `f64`.
///
/// Values beyond `f64::MAX` become positive infinity. Values above
/// `MAX_SAFE_U64_INT` are rounded and no longer exact.
///
/// # Example
/// ```
/// use boredcalc::{interpreter::function::factorial::factorial, util::num::biguint_to_f64};
///
/// assert_eq!(biguint_to_f64(&factorial(10)), 3_628_800.0);
/// assert_eq!(biguint_to_f64(&factorial(200)), f64::INFINITY);
/// ```
#[must_use]
pub fn biguint_to_f64(value: &BigUint) -> f64 {
    value.to_f64()
         .filter(|v| v.is_finite())
         .unwrap_or(f64::INFINITY)
}
