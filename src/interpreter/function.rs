/// Built-in function implementations.
///
/// Contains the trigonometric, hyperbolic, logarithmic and rounding functions.
pub mod builtin;
/// The `fact` (factorial) function implementation.
///
/// Computes factorials exactly with arbitrary-precision integers before
/// narrowing to `f64`.
pub mod factorial;

pub mod core;
