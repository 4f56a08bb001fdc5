use std::fmt::Display;

use crate::{
    error::RuntimeError,
    interpreter::{
        core::EvalResult,
        value::{core::BinaryOperator, scalar::Scalar},
    },
};

/// A non-empty, ordered sequence of scalars.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector {
    items: Vec<Scalar>,
}

impl Vector {
    /// Builds a vector from its elements.
    ///
    /// # Errors
    /// Returns `RuntimeError::EmptyVector` if `items` is empty.
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::value::{rational::Rational, scalar::Scalar, vector::Vector};
    ///
    /// let v = Vector::new(vec![Scalar::from(Rational::integer(1)),
    ///                          Scalar::from(Rational::integer(2))]).unwrap();
    /// assert_eq!(v.len(), 2);
    /// assert_eq!(v.to_string(), "[ 1 2 ]");
    /// assert!(Vector::new(vec![]).is_err());
    /// ```
    pub fn new(items: Vec<Scalar>) -> EvalResult<Self> {
        if items.is_empty() {
            return Err(RuntimeError::EmptyVector);
        }
        Ok(Self { items })
    }

    /// Number of elements. Never zero.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All elements in order.
    #[must_use]
    pub fn items(&self) -> &[Scalar] {
        &self.items
    }

    /// Element-wise `+` or `-` of two vectors of equal length.
    ///
    /// # Errors
    /// Returns `RuntimeError::DimensionMismatch` if the lengths differ.
    pub fn elementwise(&self, op: BinaryOperator, rhs: &Self) -> EvalResult<Self> {
        if self.len() != rhs.len() {
            return Err(RuntimeError::DimensionMismatch {
                details: format!("cannot apply '{op}' to vectors of length {} and {}",
                                 self.len(),
                                 rhs.len()),
            });
        }

        let items = self.items
                        .iter()
                        .zip(rhs.items.iter())
                        .map(|(a, b)| a.apply(op, *b))
                        .collect::<EvalResult<Vec<_>>>()?;
        Ok(Self { items })
    }

    /// Applies `element op scalar` to every element.
    pub fn broadcast(&self, op: BinaryOperator, scalar: Scalar) -> EvalResult<Self> {
        let items = self.items
                        .iter()
                        .map(|x| x.apply(op, scalar))
                        .collect::<EvalResult<Vec<_>>>()?;
        Ok(Self { items })
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for item in &self.items {
            write!(f, " {item}")?;
        }
        write!(f, " ]")
    }
}
