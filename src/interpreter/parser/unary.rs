use crate::{
    error::ParseError,
    interpreter::{
        function::core::lookup_function,
        parser::core::{MAX_NESTING_DEPTH, ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor, the tightest-binding level of the grammar.
    ///
    /// Supports, in this order:
    /// - unary `+` (no effect) and unary `-` (negation), both recursive
    /// - parenthesized expressions
    /// - numeric literals
    /// - lowercase identifiers, resolved as functions or variables
    ///
    /// Unary signs bind tighter than `*` and `/`, so `-2 * 3` reads as
    /// `(-2) * 3`.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | "(" expression ")"
    ///             | number
    ///             | identifier
    /// ```
    ///
    /// # Errors
    /// - `ExpectedClosingParen` if a `(` is never closed.
    /// - `UnexpectedCharacter` or `UnexpectedEndOfInput` if no factor starts
    ///   at the cursor.
    /// - `NestingTooDeep` past [`MAX_NESTING_DEPTH`] open factors.
    /// - Errors from [`Self::parse_number`] and [`Self::parse_identifier`].
    pub(crate) fn parse_factor(&mut self) -> ParseResult<f64> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { position: self.pos });
        }

        self.depth += 1;
        let x = self.parse_nested_factor();
        self.depth -= 1;
        x
    }

    fn parse_nested_factor(&mut self) -> ParseResult<f64> {
        if self.eat('+') {
            return self.parse_factor();
        }
        if self.eat('-') {
            return Ok(-self.parse_factor()?);
        }

        if self.eat('(') {
            let x = self.parse_expression()?;
            if !self.eat(')') {
                return Err(ParseError::ExpectedClosingParen { position: self.pos });
            }
            return Ok(x);
        }

        match self.ch {
            Some(ch) if is_number_char(ch) => self.parse_number(),
            Some(ch) if ch.is_ascii_lowercase() => self.parse_identifier(),
            Some(ch) => Err(ParseError::UnexpectedCharacter { ch,
                                                              position: self.pos }),
            None => Err(ParseError::UnexpectedEndOfInput { position: self.pos }),
        }
    }

    /// Parses a numeric literal.
    ///
    /// Consumes every contiguous digit and `.`, then converts the run in one
    /// go. A run such as `1.2.3` is therefore read completely and rejected as
    /// a whole rather than split into two numbers.
    ///
    /// # Errors
    /// `MalformedNumber` if the run is not a valid `f64`.
    fn parse_number(&mut self) -> ParseResult<f64> {
        let position = self.pos;
        let literal = self.take_while(is_number_char);

        literal.parse()
               .map_err(|_| ParseError::MalformedNumber { literal: literal.to_string(),
                                                          position })
    }

    /// Parses a lowercase identifier and resolves it.
    ///
    /// A built-in function name is applied to the factor that follows it, so
    /// `sqrt 16 + 1` reads as `sqrt(16) + 1`. Any other name must be bound in
    /// the environment and evaluates to its value.
    ///
    /// # Errors
    /// - `UnknownIdentifier` if the name is neither a function nor bound.
    /// - Errors from parsing the argument, or a `Domain` error raised by the
    ///   function itself.
    fn parse_identifier(&mut self) -> ParseResult<f64> {
        let position = self.pos;
        let name = self.take_while(|ch| ch.is_ascii_lowercase());

        if let Some(function) = lookup_function(name) {
            let argument = self.parse_factor()?;
            return Ok(function(argument)?);
        }

        self.env
            .get(name)
            .ok_or_else(|| ParseError::UnknownIdentifier { name: name.to_string(),
                                                           position })
    }
}

/// Returns `true` for characters that may appear in a numeric literal.
const fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}
