use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing an expression.
///
/// Positions are byte offsets into the text the parser actually scanned, which
/// is the input after variable substitution.
pub enum ParseError {
    /// Found a character that cannot start or continue a factor.
    UnexpectedCharacter {
        /// The character encountered.
        ch:       char,
        /// Byte offset of the character.
        position: usize,
    },
    /// Reached the end of input while a factor was expected.
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset where the parenthesis was expected.
        position: usize,
    },
    /// A run of digits and dots that does not form a valid number, e.g. `1.2.3`.
    MalformedNumber {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the first character of the literal.
        position: usize,
    },
    /// A lowercase word that is neither a function nor a bound variable.
    UnknownIdentifier {
        /// The identifier as written.
        name:     String,
        /// Byte offset of the first character of the identifier.
        position: usize,
    },
    /// A complete expression was parsed but input remained.
    UnexpectedTrailingInput {
        /// The first unconsumed character.
        ch:       char,
        /// Byte offset of the character.
        position: usize,
    },
    /// Parentheses, signs or function applications nest deeper than
    /// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH).
    NestingTooDeep {
        /// Byte offset of the factor that went over the limit.
        position: usize,
    },
    /// No substitution pattern could be compiled for a bound variable.
    UnsubstitutedVariable {
        /// The variable left in the text.
        name: String,
    },
    /// A built-in function rejected its argument.
    Domain(DomainError),
}

impl From<DomainError> for ParseError {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { ch, position } => {
                write!(f, "Unexpected - {ch} (at {position})")
            },
            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Unexpected end of input (at {position})")
            },
            Self::ExpectedClosingParen { position } => write!(f, "Missing ')' (at {position})"),
            Self::MalformedNumber { literal, position } => {
                write!(f, "Malformed number - {literal} (at {position})")
            },
            Self::UnknownIdentifier { name, .. } => {
                write!(f, "Unknown function or variable - {name}")
            },
            Self::UnexpectedTrailingInput { ch, position } => {
                write!(f, "Unexpected - {ch} after end of expression (at {position})")
            },
            Self::NestingTooDeep { position } => {
                write!(f, "Expression nested too deeply (at {position})")
            },
            Self::UnsubstitutedVariable { name } => {
                write!(f, "Could not substitute variable - {name}")
            },
            Self::Domain(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}
