//! # boredcalc
//!
//! boredcalc is an interactive arithmetic calculator written in Rust.
//! It evaluates expressions built from `+`, `-`, `*`, `/`, parentheses,
//! variables, the constants `PI`, `E` and `G`, and a fixed set of unary
//! functions such as `sqrt`, `sin` (in degrees) and `fact`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::{parser::core::Parser, substitution::substitute_variables},
};

/// Provides unified error types for parsing, evaluation and assignment.
///
/// This module defines every error that can be raised while handling one input
/// line. Syntax failures are collapsed into a single "invalid expression"
/// report at the public boundary while keeping the detailed cause reachable.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, functions,
///   assignment).
/// - Classifies errors into coarse kinds for callers that need to branch.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of a single line.
///
/// This module ties together variable bindings, substitution, the evaluating
/// parser, the built-in functions and assignment handling.
///
/// # Responsibilities
/// - Owns the data model: environment and function table.
/// - Implements the three-level precedence parser.
/// - Applies assignments to the environment.
pub mod interpreter;
/// Line-oriented session handling.
///
/// Classifies each input line as a command, an assignment or an expression
/// and produces a printable reply. Used by the interactive front end.
pub mod session;
/// General utilities for numeric conversion and logging.
///
/// # Responsibilities
/// - Safely convert between `f64`, `u64` and big integers.
/// - Install the `tracing` subscriber for the binary.
pub mod util;

pub use interpreter::{assignment::assign, environment::Environment};
pub use session::{Reply, Session};

/// Evaluates an expression against the given bindings.
///
/// Every bound variable is first substituted by its value, then the result is
/// parsed and computed in a single pass. The environment is not modified.
///
/// # Errors
/// - [`CalcError::InvalidExpression`] for any syntax error or unknown
///   identifier. Its message only repeats the input; the precise reason is
///   available from [`CalcError::cause`].
/// - [`CalcError::Domain`] if a function rejects its argument, e.g.
///   `fact(-1)`.
///
/// # Examples
/// ```
/// use boredcalc::{Environment, evaluate};
///
/// let env = Environment::new();
/// assert_eq!(evaluate("3 + 5 * (2 - 1)", &env).unwrap(), 8.0);
/// assert_eq!(evaluate("PI", &env).unwrap(), std::f64::consts::PI);
///
/// let err = evaluate("(3 + 4", &env).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid expression - (3 + 4");
/// ```
pub fn evaluate(expression: &str, env: &Environment) -> CalcResult<f64> {
    let collapse = |cause| CalcError::from_parse(expression, cause);

    let substituted = substitute_variables(expression, env).map_err(collapse)?;
    debug!("evaluating {substituted}");

    Parser::new(&substituted, env).parse().map_err(collapse)
}
