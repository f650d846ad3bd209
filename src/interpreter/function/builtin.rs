use crate::error::DomainError;

/// Result of applying a builtin to its argument.
pub type FunctionResult = Result<f64, DomainError>;

/// Applies an `f64` method directly to the argument.
///
/// The generated functions never fail: out-of-domain input yields NaN or an
/// infinity, e.g. `sqrt(-1)` is NaN and `ln(0)` is negative infinity.
///
/// # Example
/// ```
/// use boredcalc::interpreter::function::builtin::{ln, sqrt};
///
/// assert_eq!(sqrt(9.0).unwrap(), 3.0);
/// assert!(sqrt(-1.0).unwrap().is_nan());
/// assert_eq!(ln(0.0).unwrap(), f64::NEG_INFINITY);
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(x: f64) -> FunctionResult {
            Ok(x.$real_fn())
        }
    };
}

/// Applies a trigonometric `f64` method to an argument given in degrees.
///
/// # Example
/// ```
/// use boredcalc::interpreter::function::builtin::{cos, sin};
///
/// assert!((sin(90.0).unwrap() - 1.0).abs() < 1e-12);
/// assert!((cos(60.0).unwrap() - 0.5).abs() < 1e-12);
/// ```
macro_rules! degree_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(x: f64) -> FunctionResult {
            Ok(x.to_radians().$real_fn())
        }
    };
}

real_builtin!(sqrt, sqrt);
real_builtin!(sinh, sinh);
real_builtin!(cosh, cosh);
real_builtin!(tanh, tanh);
real_builtin!(log, log10);
real_builtin!(ln, ln);
real_builtin!(abs, abs);
real_builtin!(ceil, ceil);
real_builtin!(floor, floor);

degree_builtin!(sin, sin);
degree_builtin!(cos, cos);
degree_builtin!(tan, tan);
