use std::fmt::Display;

use crate::{
    error::RuntimeError,
    interpreter::core::EvalResult,
    util::num::{gcd, i128_to_i64_checked, ratio_to_f64},
};

/// An exact fraction of two 64 bit integers.
///
/// A `Rational` is always kept in canonical form: the denominator is positive
/// and numerator and denominator share no common factor. Because the form is
/// canonical, structural equality is numeric equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator:   i64,
    denominator: i64,
}

impl Rational {
    /// `0` as a rational number.
    pub const ZERO: Self = Self { numerator:   0,
                                  denominator: 1, };
    /// `1` as a rational number.
    pub const ONE: Self = Self { numerator:   1,
                                 denominator: 1, };

    /// Constructs a normalized rational `numerator / denominator`.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` if `denominator` is zero.
    /// - `RuntimeError::Overflow` if the normalized form does not fit in `i64`
    ///   (only possible for `i64::MIN` with a negative denominator).
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::value::rational::Rational;
    ///
    /// let half = Rational::new(2, -4).unwrap();
    /// assert_eq!(half.numerator(), -1);
    /// assert_eq!(half.denominator(), 2);
    /// assert!(Rational::new(1, 0).is_err());
    /// ```
    pub fn new(numerator: i64, denominator: i64) -> EvalResult<Self> {
        Self::from_wide(i128::from(numerator), i128::from(denominator))
    }

    /// Constructs the integer `value / 1`.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self { numerator:   value,
               denominator: 1, }
    }

    /// Normalizes a fraction computed in `i128` and narrows it back to `i64`.
    fn from_wide(mut numerator: i128, mut denominator: i128) -> EvalResult<Self> {
        if denominator == 0 {
            return Err(RuntimeError::DivisionByZero);
        }
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        let divisor = gcd(numerator, denominator);
        if divisor > 1 {
            numerator /= divisor;
            denominator /= divisor;
        }

        Ok(Self { numerator:   i128_to_i64_checked(numerator)?,
                  denominator: i128_to_i64_checked(denominator)?, })
    }

    /// The (signed) numerator of the reduced fraction.
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// The (always positive) denominator of the reduced fraction.
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Returns the nearest `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        ratio_to_f64(self.numerator, self.denominator)
    }

    /// `a/b + c/d = (ad + cb) / bd`
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::value::rational::Rational;
    ///
    /// let third = Rational::new(1, 3).unwrap();
    /// let sixth = Rational::new(1, 6).unwrap();
    /// assert_eq!(third.checked_add(sixth).unwrap().to_string(), "1/2");
    /// ```
    pub fn checked_add(self, rhs: Self) -> EvalResult<Self> {
        let (a, b, c, d) = self.widen_with(rhs);
        Self::from_wide(a * d + c * b, b * d)
    }

    /// `a/b - c/d = (ad - cb) / bd`
    pub fn checked_sub(self, rhs: Self) -> EvalResult<Self> {
        let (a, b, c, d) = self.widen_with(rhs);
        Self::from_wide(a * d - c * b, b * d)
    }

    /// `(a/b) * (c/d) = ac / bd`
    pub fn checked_mul(self, rhs: Self) -> EvalResult<Self> {
        let (a, b, c, d) = self.widen_with(rhs);
        Self::from_wide(a * c, b * d)
    }

    /// `(a/b) / (c/d) = ad / bc`
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> EvalResult<Self> {
        if rhs.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }
        let (a, b, c, d) = self.widen_with(rhs);
        Self::from_wide(a * d, b * c)
    }

    /// Products of two `i64` values always fit in `i128`, and so do sums of
    /// two such products.
    fn widen_with(self, rhs: Self) -> (i128, i128, i128, i128) {
        (i128::from(self.numerator),
         i128::from(self.denominator),
         i128::from(rhs.numerator),
         i128::from(rhs.denominator))
    }
}

impl Display for Rational {
    /// Formats as `N`, `N/D` or the mixed form `Q+(R/D)`, with a leading `-`
    /// for negative values.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denominator == 1 {
            return write!(f, "{}", self.numerator);
        }

        let sign = if self.numerator < 0 { "-" } else { "" };
        let magnitude = self.numerator.unsigned_abs();
        let denominator = self.denominator.unsigned_abs();
        let whole = magnitude / denominator;
        let remainder = magnitude % denominator;

        if whole == 0 {
            write!(f, "{sign}{remainder}/{denominator}")
        } else {
            write!(f, "{sign}{whole}+({remainder}/{denominator})")
        }
    }
}
