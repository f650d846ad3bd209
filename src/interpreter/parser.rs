/// Parser state and entry point.
///
/// Defines the [`core::Parser`] cursor over the source text, the whitespace
/// skipping `eat` primitive and the top-level `parse` that rejects trailing
/// input.
pub mod core;

/// Additive and multiplicative levels.
///
/// Implements the left-associative `+`/`-` and `*`/`/` loops.
pub mod binary;

/// Factors.
///
/// Implements unary signs, parentheses, numeric literals and identifier
/// resolution, including function application.
pub mod unary;
