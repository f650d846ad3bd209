use num_bigint::BigUint;
use tracing::{info, warn};

use crate::{
    error::DomainError,
    interpreter::function::builtin::FunctionResult,
    util::num::{biguint_to_f64, f64_to_u64_checked},
};

/// Largest argument whose factorial is computed exactly.
///
/// Anything above 170 already narrows to infinity, so larger arguments skip
/// the big-integer product and return infinity directly.
pub const MAX_EXACT_FACTORIAL: u64 = 10_000;

/// Largest argument whose exact factorial is written out in the log. This is
/// also the largest argument with a finite `f64` result.
pub const MAX_LOGGED_FACTORIAL: u64 = 170;

/// Computes `x!` for a non-negative integral `x`.
///
/// The product is accumulated exactly as a [`BigUint`] and then narrowed to
/// `f64`. Results above 2^53 lose integer precision in that narrowing, and
/// results above `f64::MAX` become infinity.
///
/// # Errors
/// - `NegativeFactorial` if `x < 0`.
/// - `FractionalFactorial` if `x` has a fractional part or is NaN.
///
/// # Example
/// ```
/// use boredcalc::{error::DomainError, interpreter::function::factorial::fact};
///
/// assert_eq!(fact(5.0).unwrap(), 120.0);
/// assert_eq!(fact(0.0).unwrap(), 1.0);
/// assert_eq!(fact(171.0).unwrap(), f64::INFINITY);
/// assert!(matches!(fact(-1.0), Err(DomainError::NegativeFactorial { .. })));
/// assert!(matches!(fact(2.5), Err(DomainError::FractionalFactorial { .. })));
/// ```
#[allow(clippy::float_cmp, clippy::cast_precision_loss)]
pub fn fact(x: f64) -> FunctionResult {
    if x < 0.0 {
        return Err(DomainError::NegativeFactorial { value: x });
    }
    if x != x.floor() {
        return Err(DomainError::FractionalFactorial { value: x });
    }

    if x > MAX_EXACT_FACTORIAL as f64 {
        warn!("fact({x}) exceeds {MAX_EXACT_FACTORIAL}, result is infinite");
        return Ok(f64::INFINITY);
    }

    let n = f64_to_u64_checked(x).ok_or(DomainError::FractionalFactorial { value: x })?;
    let exact = factorial(n);
    info!("Factorial Result > {}", factorial_summary(n, &exact));

    Ok(biguint_to_f64(&exact))
}

/// Computes `n!` exactly.
///
/// # Example
/// ```
/// use boredcalc::interpreter::function::factorial::factorial;
///
/// assert_eq!(factorial(20).to_string(), "2432902008176640000");
/// assert_eq!(factorial(25).to_string(), "15511210043330985984000000");
/// ```
#[must_use]
pub fn factorial(n: u64) -> BigUint {
    (1..=n).fold(BigUint::from(1u32), |acc, i| acc * i)
}

/// Renders `n! = exact` for the log: every digit up to
/// [`MAX_LOGGED_FACTORIAL`], only the size beyond it.
///
/// # Example
/// ```
/// use boredcalc::interpreter::function::factorial::{factorial, factorial_summary};
///
/// assert_eq!(factorial_summary(5, &factorial(5)), "120");
/// assert_eq!(factorial_summary(1000, &factorial(1000)), "8530-bit integer");
/// ```
#[must_use]
pub fn factorial_summary(n: u64, exact: &BigUint) -> String {
    if n <= MAX_LOGGED_FACTORIAL {
        exact.to_string()
    } else {
        format!("{}-bit integer", exact.bits())
    }
}
