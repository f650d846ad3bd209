/// Parsing errors.
///
/// Defines all error types that can occur while scanning and evaluating an
/// expression. Parse errors include unexpected characters, malformed numeric
/// literals, unbalanced parentheses and unknown identifiers.
pub mod parse_error;
/// Domain errors.
///
/// Raised when a built-in function receives an argument outside of its
/// domain and the function refuses to produce a floating-point fallback.
pub mod domain_error;
/// Public calculator errors.
///
/// Wraps parse and domain errors at the evaluation boundary and adds the
/// assignment errors. This is the error type returned by [`crate::evaluate`]
/// and [`crate::assign`].
pub mod calc_error;

pub use calc_error::{CalcError, CalcResult, ErrorKind};
pub use domain_error::DomainError;
pub use parse_error::ParseError;
