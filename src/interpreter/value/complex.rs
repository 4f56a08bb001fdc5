use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    ops,
};

use ordered_float::OrderedFloat;

use crate::{error::RuntimeError, interpreter::core::EvalResult};

/// Magnitude below which a component counts as zero when deciding how to
/// render a complex number.
pub const DISPLAY_EPSILON: f64 = 1e-12;
/// Magnitude below which both components of a divisor count as zero.
pub const DIVISION_EPSILON: f64 = 1e-18;
/// Digits after the decimal point when rendering a component.
pub const DISPLAY_PRECISION: usize = 10;

/// The imaginary unit `0 + 1i`.
pub const I: ComplexNumber = ComplexNumber::new(0.0, 1.0);

/// Represents a complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (real, imaginary) = (self.real, self.imaginary);

        if imaginary.abs() < DISPLAY_EPSILON {
            write_component(f, real)
        } else if real.abs() < DISPLAY_EPSILON {
            write_component(f, imaginary)?;
            write!(f, "i")
        } else {
            write_component(f, real)?;
            if imaginary >= 0.0 {
                write!(f, "+")?;
            }
            write_component(f, imaginary)?;
            write!(f, "i")
        }
    }
}

/// Writes one component in fixed point. Non-finite values are written as
/// `nan`, `inf` and `-inf`.
fn write_component(f: &mut std::fmt::Formatter<'_>, value: f64) -> std::fmt::Result {
    if value.is_finite() {
        write!(f, "{value:.p$}", p = DISPLAY_PRECISION)
    } else {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        let name = if value.is_nan() { "nan" } else { "inf" };
        write!(f, "{sign}{name}")
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// assert_eq!(c.to_string(), "5.0000000000-1.0000000000i");
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Returns `true` if both components are within [`DIVISION_EPSILON`] of
    /// zero.
    #[must_use]
    pub fn is_near_zero(&self) -> bool {
        self.real.abs() < DIVISION_EPSILON && self.imaginary.abs() < DIVISION_EPSILON
    }

    /// Divides by `rhs`, refusing divisors at the origin.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` if `rhs` is within
    /// [`DIVISION_EPSILON`] of zero in both components.
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::value::complex::{ComplexNumber, I};
    ///
    /// let one = ComplexNumber::from(1.0);
    /// assert_eq!(one.checked_div(I).unwrap(), ComplexNumber::new(0.0, -1.0));
    /// assert!(one.checked_div(ComplexNumber::new(1e-20, 0.0)).is_err());
    /// ```
    pub fn checked_div(self, rhs: Self) -> EvalResult<Self> {
        if rhs.is_near_zero() {
            return Err(RuntimeError::DivisionByZero);
        }
        Ok(self / rhs)
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real
                              .mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
               imaginary: self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real), }
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    /// Smith's algorithm: scales by the ratio of the divisor's parts so that
    /// large finite divisors do not overflow to infinity.
    fn div(self, rhs: Self) -> Self::Output {
        let (a, b) = (self.real, self.imaginary);
        let (c, d) = (rhs.real, rhs.imaginary);

        if c.abs() >= d.abs() {
            let ratio = d / c;
            let denom = d.mul_add(ratio, c);
            Self { real:      b.mul_add(ratio, a) / denom,
                   imaginary: (-a).mul_add(ratio, b) / denom, }
        } else {
            let ratio = c / d;
            let denom = c.mul_add(ratio, d);
            Self { real:      a.mul_add(ratio, b) / denom,
                   imaginary: b.mul_add(ratio, -a) / denom, }
        }
    }
}

impl<T> From<T> for ComplexNumber where T: Into<f64>
{
    fn from(value: T) -> Self {
        Self { real:      value.into(),
               imaginary: 0.0, }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for ComplexNumber {}

impl Hash for ComplexNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.real).hash(state);
        OrderedFloat(self.imaginary).hash(state);
    }
}
