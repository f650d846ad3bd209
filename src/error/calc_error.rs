use crate::error::{DomainError, ParseError};

/// Result type returned by the public entry points.
pub type CalcResult<T> = Result<T, CalcError>;

/// Coarse classification of every error the calculator can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed literal, unbalanced parenthesis, stray or trailing character.
    Syntax,
    /// A lowercase word that is neither a function nor a bound variable.
    UnknownIdentifier,
    /// A function argument outside of the function's domain.
    Domain,
    /// A malformed assignment line or variable name.
    AssignmentSyntax,
}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors reported by [`crate::evaluate`] and
/// [`crate::assign`].
///
/// Syntax-level failures are collapsed into [`CalcError::InvalidExpression`],
/// whose message only repeats the input. The precise cause is still available
/// through [`CalcError::cause`] and [`std::error::Error::source`].
pub enum CalcError {
    /// The expression could not be parsed.
    InvalidExpression {
        /// The expression as the user typed it, before substitution.
        expression: String,
        /// What actually went wrong.
        cause:      ParseError,
    },
    /// A built-in function rejected its argument.
    Domain(DomainError),
    /// The line has no `=` or nothing on one of its sides.
    InvalidAssignment {
        /// The offending line.
        line: String,
    },
    /// The left-hand side of an assignment is not purely alphabetic.
    InvalidVariableName {
        /// The rejected name.
        name: String,
    },
}

impl CalcError {
    /// Maps this error onto its [`ErrorKind`].
    ///
    /// # Example
    /// ```
    /// use boredcalc::{Environment, error::ErrorKind, evaluate};
    ///
    /// let env = Environment::new();
    /// let err = evaluate("foo(1)", &env).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::UnknownIdentifier);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidExpression { cause: ParseError::UnknownIdentifier { .. },
                                      .. } => ErrorKind::UnknownIdentifier,
            Self::InvalidExpression { cause: ParseError::Domain(_), .. } | Self::Domain(_) => {
                ErrorKind::Domain
            },
            Self::InvalidExpression { .. } => ErrorKind::Syntax,
            Self::InvalidAssignment { .. } | Self::InvalidVariableName { .. } => {
                ErrorKind::AssignmentSyntax
            },
        }
    }

    /// Returns the detailed parse error behind a collapsed
    /// [`CalcError::InvalidExpression`].
    #[must_use]
    pub const fn cause(&self) -> Option<&ParseError> {
        match self {
            Self::InvalidExpression { cause, .. } => Some(cause),
            _ => None,
        }
    }

    /// Builds the public error for a failed parse of `expression`.
    ///
    /// Domain failures keep their own message, everything else collapses into
    /// [`CalcError::InvalidExpression`].
    pub(crate) fn from_parse(expression: &str, cause: ParseError) -> Self {
        match cause {
            ParseError::Domain(e) => Self::Domain(e),
            cause => Self::InvalidExpression { expression: expression.to_string(),
                                               cause },
        }
    }
}

impl From<DomainError> for CalcError {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression { expression, .. } => {
                write!(f, "Invalid expression - {expression}")
            },
            Self::Domain(e) => write!(f, "{e}"),
            Self::InvalidAssignment { .. } => write!(f, "Invalid assignment syntax."),
            Self::InvalidVariableName { .. } => write!(f, "Invalid variable name."),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidExpression { cause, .. } => Some(cause),
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}
