/// Checked integer helpers.
///
/// This module provides the integer routines exact rational arithmetic is
/// built on: greatest common divisors, narrowing from the wide intermediate
/// type back to `i64`, and the lossy widening to `f64` used when a rational
/// meets a complex number.
///
/// All narrowing functions return a `Result` or `Option` instead of silently
/// wrapping around.
pub mod num;
