use std::fmt::Display;

use crate::interpreter::{
    core::EvalResult,
    value::{complex::ComplexNumber, core::BinaryOperator, rational::Rational},
};

/// A single number: the element type of vectors and matrices.
///
/// Rational operands stay exact when combined with each other. As soon as one
/// side is complex, the rational side is widened to `(num / den, 0)` and the
/// operation is carried out in complex arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    /// An exact fraction.
    Rational(Rational),
    /// A pair of doubles.
    Complex(ComplexNumber),
}

impl From<Rational> for Scalar {
    fn from(r: Rational) -> Self {
        Self::Rational(r)
    }
}

impl From<ComplexNumber> for Scalar {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl Scalar {
    /// Exact zero, the starting value of every dot-product accumulation.
    pub const ZERO: Self = Self::Rational(Rational::ZERO);

    /// Widens the scalar to a complex number.
    #[must_use]
    pub fn as_complex(&self) -> ComplexNumber {
        match self {
            Self::Rational(r) => ComplexNumber::from(r.to_f64()),
            Self::Complex(c) => *c,
        }
    }

    /// Applies an arithmetic operator to two scalars.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` for a zero rational divisor or a
    ///   complex divisor at the origin.
    /// - `RuntimeError::Overflow` if an exact result leaves the `i64` range.
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::value::{
    ///     core::BinaryOperator, rational::Rational, scalar::Scalar,
    /// };
    ///
    /// let a = Scalar::from(Rational::new(1, 2).unwrap());
    /// let b = Scalar::from(Rational::new(1, 3).unwrap());
    /// let sum = a.apply(BinaryOperator::Add, b).unwrap();
    /// assert_eq!(sum, Scalar::from(Rational::new(5, 6).unwrap()));
    /// ```
    pub fn apply(self, op: BinaryOperator, rhs: Self) -> EvalResult<Self> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        match (self, rhs) {
            (Self::Rational(a), Self::Rational(b)) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    Div => a.checked_div(b),
                }?;
                Ok(Self::Rational(result))
            },
            _ => {
                let (a, b) = (self.as_complex(), rhs.as_complex());
                let result = match op {
                    Add => a + b,
                    Sub => a - b,
                    Mul => a * b,
                    Div => a.checked_div(b)?,
                };
                Ok(Self::Complex(result))
            },
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rational(r) => write!(f, "{r}"),
            Self::Complex(c) => write!(f, "{c}"),
        }
    }
}
