#[derive(Debug, Clone, PartialEq)]
/// Represents an argument that lies outside a function's domain.
pub enum DomainError {
    /// `fact` received a negative value.
    NegativeFactorial {
        /// The offending argument.
        value: f64,
    },
    /// `fact` received a value with a fractional part.
    FractionalFactorial {
        /// The offending argument.
        value: f64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeFactorial { .. } | Self::FractionalFactorial { .. } => {
                write!(f, "Factorial is only defined for non-negative integers.")
            },
        }
    }
}

impl std::error::Error for DomainError {}
