use std::borrow::Cow;

use regex::{Captures, Regex, RegexBuilder};
use tracing::warn;

use crate::{
    error::ParseError,
    interpreter::{environment::Environment, parser::core::ParseResult},
};

/// Compiled-size budget for one substitution pattern.
pub const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Replaces every whole-word occurrence of a bound variable with its value.
///
/// All names are matched in a single pass over the input, so text inserted
/// for one variable is never rescanned for another. Matching is anchored on
/// word boundaries: binding `x` leaves `max` and `sinx` untouched.
///
/// If the combined pattern for all names is too large to compile, the names
/// are substituted one at a time by [`substitute_each`] instead.
///
/// # Parameters
/// - `expression`: Text as typed by the user.
/// - `env`: Bindings to substitute. Not modified.
///
/// # Returns
/// The rewritten text, or the input itself if nothing matched.
///
/// # Errors
/// `UnsubstitutedVariable` if even a single name's pattern cannot be built.
///
/// # Example
/// ```
/// use boredcalc::{Environment, interpreter::substitution::substitute_variables};
///
/// let mut env = Environment::empty();
/// env.set("x", 5.0).unwrap();
///
/// assert_eq!(substitute_variables("x + max", &env).unwrap(), "5 + max");
/// assert_eq!(substitute_variables("2*x", &env).unwrap(), "2*5");
/// ```
pub fn substitute_variables<'a>(expression: &'a str,
                                env: &Environment)
                                -> ParseResult<Cow<'a, str>> {
    if env.is_empty() {
        return Ok(Cow::Borrowed(expression));
    }

    let names = names_longest_first(env);
    let alternation = names.iter()
                           .map(|name| regex::escape(name))
                           .collect::<Vec<_>>()
                           .join("|");

    match word_pattern(&alternation) {
        Ok(pattern) => Ok(replace_words(&pattern, expression, env)),
        Err(e) => {
            warn!("combined pattern for {} variables rejected ({e}), substituting one at a time",
                  names.len());
            substitute_each(expression, env)
        },
    }
}

/// Replaces bound variables one name at a time, longest names first.
///
/// Gives the same result as [`substitute_variables`]: rendered values never
/// contain letters, so rescanning inserted text cannot match another name.
///
/// # Errors
/// `UnsubstitutedVariable` naming the first variable whose pattern cannot be
/// built.
///
/// # Example
/// ```
/// use boredcalc::{Environment, interpreter::substitution::substitute_each};
///
/// let mut env = Environment::empty();
/// env.set("a", 2.0).unwrap();
/// env.set("ab", 30.0).unwrap();
///
/// assert_eq!(substitute_each("ab - a", &env).unwrap(), "30 - 2");
/// ```
pub fn substitute_each<'a>(expression: &'a str, env: &Environment) -> ParseResult<Cow<'a, str>> {
    let mut text = Cow::Borrowed(expression);

    for name in names_longest_first(env) {
        let pattern =
            word_pattern(&regex::escape(name)).map_err(|_| ParseError::UnsubstitutedVariable {
                                                  name: name.to_string(),
                                              })?;
        if pattern.is_match(&text) {
            let replaced = replace_words(&pattern, &text, env).into_owned();
            text = Cow::Owned(replaced);
        }
    }

    Ok(text)
}

fn names_longest_first(env: &Environment) -> Vec<&str> {
    let mut names: Vec<&str> = env.iter().map(|(name, _)| name).collect();
    // Longer names first so that an alternation never settles on a prefix.
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    names
}

fn word_pattern(body: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\b(?:{body})\b")).size_limit(PATTERN_SIZE_LIMIT)
                                                   .build()
}

fn replace_words<'t>(pattern: &Regex, text: &'t str, env: &Environment) -> Cow<'t, str> {
    pattern.replace_all(text, |caps: &Captures<'_>| {
               let name = &caps[0];
               env.get(name)
                  .map_or_else(|| name.to_string(), format_value)
           })
}

/// Renders a value so that the parser reads it back unchanged.
///
/// Finite values use Rust's shortest round-trip decimal form, which never
/// contains an exponent. Infinities and NaN have no literal syntax and are
/// written as the divisions that produce them.
///
/// # Example
/// ```
/// use boredcalc::interpreter::substitution::format_value;
///
/// assert_eq!(format_value(2.5), "2.5");
/// assert_eq!(format_value(-3.0), "-3");
/// assert_eq!(format_value(f64::INFINITY), "(1/0)");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "(0/0)".to_string()
    } else if value == f64::INFINITY {
        "(1/0)".to_string()
    } else if value == f64::NEG_INFINITY {
        "(-1/0)".to_string()
    } else {
        value.to_string()
    }
}
