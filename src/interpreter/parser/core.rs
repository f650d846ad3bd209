use crate::{error::ParseError, interpreter::environment::Environment};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many factors may be open at once, counting every parenthesis, unary
/// sign and function application on the way down.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Single-pass parser that evaluates while it scans.
///
/// The parser walks the source once, left to right, holding the current byte
/// offset and the character found there. No tokens or syntax tree are built:
/// every grammar rule returns the value of the text it consumed.
///
/// Grammar:
/// ```text
///     expression := term (("+" | "-") term)*
///     term       := factor (("*" | "/") factor)*
///     factor     := ("+" | "-") factor
///                 | "(" expression ")"
///                 | number
///                 | variable
///                 | function factor
/// ```
///
/// The environment is only consulted for lowercase names that survived
/// variable substitution; it is never modified.
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) source: &'a str,
    pub(in crate::interpreter::parser) env:    &'a Environment,
    pub(in crate::interpreter::parser) pos:    usize,
    pub(in crate::interpreter::parser) ch:     Option<char>,
    pub(in crate::interpreter::parser) depth:  usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first character of `source`.
    #[must_use]
    pub fn new(source: &'a str, env: &'a Environment) -> Self {
        Self { source,
               env,
               pos: 0,
               ch: source.chars().next(),
               depth: 0 }
    }

    /// Parses and evaluates the whole source.
    ///
    /// # Errors
    /// Returns a [`ParseError`] if the source is not a single well-formed
    /// expression, or if a built-in function rejects its argument.
    ///
    /// # Example
    /// ```
    /// use boredcalc::{Environment, interpreter::parser::core::Parser};
    ///
    /// let env = Environment::empty();
    /// assert_eq!(Parser::new("3 + 5 * (2 - 1)", &env).parse().unwrap(), 8.0);
    /// assert!(Parser::new("(3 + 4", &env).parse().is_err());
    /// ```
    pub fn parse(mut self) -> ParseResult<f64> {
        let x = self.parse_expression()?;
        match self.ch {
            Some(ch) => Err(ParseError::UnexpectedTrailingInput { ch,
                                                                  position: self.pos }),
            None => Ok(x),
        }
    }

    /// Moves the cursor one character forward.
    pub(in crate::interpreter::parser) fn next_char(&mut self) {
        if let Some(ch) = self.ch {
            self.pos += ch.len_utf8();
            self.ch = self.source[self.pos..].chars().next();
        }
    }

    /// Skips spaces, then consumes `expected` if it is the current character.
    ///
    /// Returns `true` if the character was consumed. The skipped spaces stay
    /// consumed either way.
    pub(in crate::interpreter::parser) fn eat(&mut self, expected: char) -> bool {
        while self.ch == Some(' ') {
            self.next_char();
        }
        if self.ch == Some(expected) {
            self.next_char();
            return true;
        }
        false
    }

    /// Consumes characters while `pred` holds and returns the consumed slice.
    pub(in crate::interpreter::parser) fn take_while(&mut self,
                                                     pred: impl Fn(char) -> bool)
                                                     -> &'a str {
        let source = self.source;
        let start = self.pos;
        while let Some(ch) = self.ch
              && pred(ch)
        {
            self.next_char();
        }
        &source[start..self.pos]
    }
}
