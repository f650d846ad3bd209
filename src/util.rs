/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between floating-point
/// and integer types without risking silent data loss, plus the narrowing of
/// arbitrary-precision integers back to `f64`.
pub mod num;
/// Logger initialisation for the command-line front end.
///
/// The library only emits `tracing` events; installing a subscriber is left to
/// the binary.
pub mod logger;
