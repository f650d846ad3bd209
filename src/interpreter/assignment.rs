use tracing::debug;

use crate::{
    error::{CalcError, CalcResult},
    evaluate,
    interpreter::environment::{Environment, is_valid_name},
};

/// Evaluates an assignment line and stores the result.
///
/// The line is split at its first `=`. The left side, trimmed, must be a
/// purely alphabetic name; the right side is evaluated against the bindings
/// as they were before this assignment, so `x = x + 1` increments `x`. Any
/// further `=` stays in the expression and makes it fail to parse.
///
/// Constants are ordinary bindings and may be overwritten.
///
/// # Parameters
/// - `line`: Input of the form `name = expression`.
/// - `env`: Bindings to read from and update.
///
/// # Returns
/// The assigned name and value.
///
/// # Errors
/// - `InvalidAssignment` if the line contains no `=`.
/// - `InvalidVariableName` if the name is empty or not `[A-Za-z]+`.
/// - Any error from evaluating the right-hand side. The environment is left
///   untouched on failure.
///
/// # Example
/// ```
/// use boredcalc::{Environment, assign, evaluate};
///
/// let mut env = Environment::new();
/// assert_eq!(assign("x = 5", &mut env).unwrap(), ("x".to_string(), 5.0));
/// assert_eq!(assign("y = x + 1", &mut env).unwrap().1, 6.0);
/// assert_eq!(evaluate("x * y", &env).unwrap(), 30.0);
///
/// assert!(assign("x1 = 2", &mut env).is_err());
/// assert!(assign("a = b = 1", &mut env).is_err());
/// ```
pub fn assign(line: &str, env: &mut Environment) -> CalcResult<(String, f64)> {
    let Some((name, expression)) = line.split_once('=') else {
        return Err(CalcError::InvalidAssignment { line: line.to_string() });
    };

    let name = name.trim();
    if !is_valid_name(name) {
        return Err(CalcError::InvalidVariableName { name: name.to_string() });
    }

    let value = evaluate(expression.trim(), env)?;
    if let Some(previous) = env.set(name, value)? {
        debug!("{name}: {previous} -> {value}");
    } else {
        debug!("{name} bound to {value}");
    }

    Ok((name.to_string(), value))
}
