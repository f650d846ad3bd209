/// Variable bindings.
///
/// Defines the [`environment::Environment`] holding a session's variables,
/// seeded with the constants `PI`, `E` and `G`, and the rule for valid
/// variable names.
pub mod environment;
/// Textual variable substitution.
///
/// Rewrites an expression by replacing every bound variable with the decimal
/// form of its value before parsing begins.
///
/// # Responsibilities
/// - Matches whole words only, so `x` never matches inside `max`.
/// - Replaces all names in one pass; substituted text is never rescanned.
pub mod substitution;
/// The parser module evaluates expressions as it reads them.
///
/// The parser walks the text character by character through three precedence
/// levels (expression, term and factor), producing the numeric result
/// directly instead of building a syntax tree.
///
/// # Responsibilities
/// - Applies operator precedence and left associativity.
/// - Resolves function names and leftover lowercase variables.
/// - Reports syntax errors with the offending position.
pub mod parser;
/// Built-in functions.
///
/// Holds the fixed table of unary functions available to every expression
/// and their implementations.
pub mod function;
/// Assignment lines.
///
/// Splits `name = expression`, validates the name, evaluates the right-hand
/// side and stores the result.
pub mod assignment;
