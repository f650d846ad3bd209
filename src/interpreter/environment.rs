use std::collections::BTreeMap;

use crate::error::{CalcError, CalcResult};

/// The gravitational constant in m³·kg⁻¹·s⁻².
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Constants every fresh [`Environment`] starts with.
pub const CONSTANTS: &[(&str, f64)] = &[("PI", std::f64::consts::PI),
                                        ("E", std::f64::consts::E),
                                        ("G", GRAVITATIONAL_CONSTANT)];

/// Stores the variable bindings of one calculator session.
///
/// Names are case-sensitive and purely alphabetic. The seeded constants are
/// ordinary bindings: assigning to `PI` simply replaces it.
///
/// ## Usage
///
/// An `Environment` is created once per session and handed by reference to
/// [`crate::evaluate`] and by mutable reference to [`crate::assign`].
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    variables: BTreeMap<String, f64>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment seeded with `PI`, `E` and `G`.
    ///
    /// # Example
    /// ```
    /// use boredcalc::Environment;
    ///
    /// let env = Environment::new();
    /// assert_eq!(env.get("PI"), Some(std::f64::consts::PI));
    /// assert_eq!(env.len(), 3);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut env = Self::empty();
        env.reset();
        env
    }

    /// Creates an environment without any bindings.
    #[must_use]
    pub const fn empty() -> Self {
        Self { variables: BTreeMap::new() }
    }

    /// Drops every binding and restores the seeded constants.
    pub fn reset(&mut self) {
        self.variables.clear();
        for (name, value) in CONSTANTS {
            self.variables.insert((*name).to_string(), *value);
        }
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Binds `name` to `value`, returning the previous value if there was one.
    ///
    /// # Errors
    /// Returns [`CalcError::InvalidVariableName`] unless `name` matches
    /// `[A-Za-z]+`.
    ///
    /// # Example
    /// ```
    /// use boredcalc::Environment;
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(env.set("PI", 3.0).unwrap(), Some(std::f64::consts::PI));
    /// assert!(env.set("x1", 1.0).is_err());
    /// ```
    pub fn set(&mut self, name: &str, value: f64) -> CalcResult<Option<f64>> {
        if !is_valid_name(name) {
            return Err(CalcError::InvalidVariableName { name: name.to_string() });
        }
        Ok(self.variables.insert(name.to_string(), value))
    }

    /// Iterates over all bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of bindings, constants included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Returns `true` if `name` is a non-empty run of ASCII letters.
///
/// # Example
/// ```
/// use boredcalc::interpreter::environment::is_valid_name;
///
/// assert!(is_valid_name("Speed"));
/// assert!(!is_valid_name("x_1"));
/// assert!(!is_valid_name(""));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic())
}
