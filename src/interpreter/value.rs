/// Exact rational numbers.
///
/// Defines `Rational`, an always-normalized fraction of two `i64` values with
/// checked arithmetic and the `N`, `N/D` and `Q+(R/D)` renderings.
pub mod rational;
/// Complex number support.
///
/// Defines the `ComplexNumber` type used for arithmetic with real and imaginary
/// parts, its tolerance-based zero test for division, and its fixed-point
/// rendering.
pub mod complex;
/// Scalars: the element type of vectors and matrices.
///
/// Implements the promotion rule between rationals and complex numbers.
pub mod scalar;
/// Vectors of scalars.
pub mod vector;
/// Matrices of scalars.
///
/// Implements element-wise arithmetic, broadcasting, matrix-vector and
/// matrix-matrix products and transposition.
pub mod matrix;

pub mod core;
