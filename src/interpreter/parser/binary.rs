use crate::interpreter::parser::core::{ParseResult, Parser};

impl Parser<'_> {
    /// Parses addition and subtraction.
    ///
    /// Handles the left-associative operators `+` and `-`, folding each term
    /// into the running value as soon as it is read.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    ///
    /// Stops at the first character that is neither operator, leaving it for
    /// the caller.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<f64> {
        let mut x = self.parse_term()?;
        loop {
            if self.eat('+') {
                x += self.parse_term()?;
            } else if self.eat('-') {
                x -= self.parse_term()?;
            } else {
                return Ok(x);
            }
        }
    }

    /// Parses multiplication and division.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    ///
    /// Division follows IEEE 754: dividing by zero yields a signed infinity,
    /// or NaN for `0/0`, and the result keeps propagating.
    pub(crate) fn parse_term(&mut self) -> ParseResult<f64> {
        let mut x = self.parse_factor()?;
        loop {
            if self.eat('*') {
                x *= self.parse_factor()?;
            } else if self.eat('/') {
                x /= self.parse_factor()?;
            } else {
                return Ok(x);
            }
        }
    }
}
