use std::{fmt::Display, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        core::EvalResult,
        value::{
            complex::ComplexNumber, matrix::Matrix, rational::Rational, scalar::Scalar,
            vector::Vector,
        },
    },
};

/// The four arithmetic operators of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// The operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a runtime value in the interpreter.
///
/// Values are immutable; every operation allocates a new result. Vectors and
/// matrices sit behind an `Rc`, so binding one value to several names, as in
/// `V3 = V2`, shares it instead of copying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An exact fraction.
    Rational(Rational),
    /// A complex number of two doubles.
    Complex(ComplexNumber),
    /// A row of scalars.
    Vector(Rc<Vector>),
    /// A rectangular grid of scalars.
    Matrix(Rc<Matrix>),
}

impl From<Rational> for Value {
    fn from(r: Rational) -> Self {
        Self::Rational(r)
    }
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::Rational(r) => Self::Rational(r),
            Scalar::Complex(c) => Self::Complex(c),
        }
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Self::Vector(Rc::new(v))
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Self::Matrix(Rc::new(m))
    }
}

impl Value {
    /// Name of the variant, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Rational(_) => "rational",
            Self::Complex(_) => "complex",
            Self::Vector(_) => "vector",
            Self::Matrix(_) => "matrix",
        }
    }

    /// Returns the value as a scalar, or `None` for vectors and matrices.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Self::Rational(r) => Some(Scalar::Rational(*r)),
            Self::Complex(c) => Some(Scalar::Complex(*c)),
            Self::Vector(_) | Self::Matrix(_) => None,
        }
    }

    /// Returns `true` for rationals and complex numbers.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Rational(_) | Self::Complex(_))
    }

    /// Returns `true` for vectors and matrices.
    #[must_use]
    pub const fn is_tensor(&self) -> bool {
        !self.is_scalar()
    }

    /// Applies a binary arithmetic operator.
    ///
    /// The combinations that are defined:
    ///
    /// | left    | right   | `+ -` | `*`            | `/`          |
    /// |---------|---------|-------|----------------|--------------|
    /// | scalar  | scalar  | yes   | yes            | yes          |
    /// | vector  | vector  | yes   |                |              |
    /// | vector  | scalar  |       | broadcast      | broadcast    |
    /// | matrix  | matrix  | yes   | product        |              |
    /// | matrix  | vector  |       | product        |              |
    /// | matrix  | scalar  |       | broadcast      | broadcast    |
    ///
    /// Every other combination fails with
    /// `RuntimeError::UnsupportedOperation`. Note that `scalar * vector` is not
    /// in the table; the parser swaps the operands for that case.
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::value::{core::Value, rational::Rational};
    ///
    /// let a = Value::from(Rational::new(1, 3).unwrap());
    /// let b = Value::from(Rational::new(1, 6).unwrap());
    /// assert_eq!(a.add(&b).unwrap().to_string(), "1/2");
    /// ```
    pub fn apply(&self, op: BinaryOperator, rhs: &Self) -> EvalResult<Self> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        if let (Some(a), Some(b)) = (self.as_scalar(), rhs.as_scalar()) {
            return Ok(a.apply(op, b)?.into());
        }

        match (op, self, rhs, rhs.as_scalar()) {
            (Add | Sub, Self::Vector(a), Self::Vector(b), _) => Ok(a.elementwise(op, b)?.into()),
            (Add | Sub, Self::Matrix(a), Self::Matrix(b), _) => Ok(a.elementwise(op, b)?.into()),
            (Mul | Div, Self::Vector(v), _, Some(scalar)) => Ok(v.broadcast(op, scalar)?.into()),
            (Mul | Div, Self::Matrix(m), _, Some(scalar)) => Ok(m.broadcast(op, scalar)?.into()),
            (Mul, Self::Matrix(m), Self::Vector(v), _) => Ok(m.mul_vector(v)?.into()),
            (Mul, Self::Matrix(a), Self::Matrix(b), _) => Ok(a.mul_matrix(b)?.into()),
            _ => Err(unsupported(op, self, rhs)),
        }
    }

    /// `self + rhs`
    pub fn add(&self, rhs: &Self) -> EvalResult<Self> {
        self.apply(BinaryOperator::Add, rhs)
    }

    /// `self - rhs`
    pub fn sub(&self, rhs: &Self) -> EvalResult<Self> {
        self.apply(BinaryOperator::Sub, rhs)
    }

    /// `self * rhs`
    pub fn mul(&self, rhs: &Self) -> EvalResult<Self> {
        self.apply(BinaryOperator::Mul, rhs)
    }

    /// `self / rhs`
    pub fn div(&self, rhs: &Self) -> EvalResult<Self> {
        self.apply(BinaryOperator::Div, rhs)
    }

    /// Transposes a matrix.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnsupportedUnaryOperation` for every other kind.
    pub fn transpose(&self) -> EvalResult<Self> {
        match self {
            Self::Matrix(m) => Ok(m.transpose().into()),
            _ => Err(RuntimeError::UnsupportedUnaryOperation { op:      "T",
                                                               operand: self.kind_name(), }),
        }
    }
}

fn unsupported(op: BinaryOperator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::UnsupportedOperation { op:    op.symbol(),
                                         left:  left.kind_name(),
                                         right: right.kind_name(), }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rational(r) => write!(f, "{r}"),
            Self::Complex(c) => write!(f, "{c}"),
            Self::Vector(v) => write!(f, "{v}"),
            Self::Matrix(m) => write!(f, "{m}"),
        }
    }
}
