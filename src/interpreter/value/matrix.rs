use std::fmt::Display;

use crate::{
    error::RuntimeError,
    interpreter::{
        core::EvalResult,
        value::{core::BinaryOperator, scalar::Scalar, vector::Vector},
    },
};

/// A rectangular grid of scalars with at least one row and one column.
///
/// Cells are stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows:  usize,
    cols:  usize,
    cells: Vec<Scalar>,
}

impl Matrix {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    /// - `RuntimeError::EmptyMatrix` if there are no rows, or the first row is
    ///   empty.
    /// - `RuntimeError::RaggedMatrix` if the rows differ in length.
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::value::{matrix::Matrix, rational::Rational, scalar::Scalar};
    ///
    /// let n = |v| Scalar::from(Rational::integer(v));
    /// let m = Matrix::from_rows(vec![vec![n(1), n(2)], vec![n(3), n(4)]]).unwrap();
    /// assert_eq!((m.rows(), m.cols()), (2, 2));
    /// assert_eq!(m.to_string(), "[\n1 2;\n3 4\n]");
    ///
    /// assert!(Matrix::from_rows(vec![vec![n(1), n(2)], vec![n(3)]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Scalar>>) -> EvalResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(RuntimeError::EmptyMatrix);
        }

        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(RuntimeError::RaggedMatrix { row:      index + 1,
                                                        expected: cols,
                                                        found:    row.len(), });
            }
            cells.extend(row);
        }

        Ok(Self { rows: row_count,
                  cols,
                  cells })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at `(row, col)`, if inside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Scalar> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// The cells of one row.
    ///
    /// # Panics
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Scalar] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterates over the rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Scalar]> {
        self.cells.chunks_exact(self.cols)
    }

    fn shape(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }

    /// Element-wise `+` or `-` of two matrices of the same shape.
    ///
    /// # Errors
    /// Returns `RuntimeError::DimensionMismatch` unless row and column counts
    /// both match.
    pub fn elementwise(&self, op: BinaryOperator, rhs: &Self) -> EvalResult<Self> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(RuntimeError::DimensionMismatch {
                details: format!("cannot apply '{op}' to a {} matrix and a {} matrix",
                                 self.shape(),
                                 rhs.shape()),
            });
        }

        let cells = self.cells
                        .iter()
                        .zip(rhs.cells.iter())
                        .map(|(a, b)| a.apply(op, *b))
                        .collect::<EvalResult<Vec<_>>>()?;
        Ok(Self { cells, ..*self })
    }

    /// Applies `cell op scalar` to every cell.
    pub fn broadcast(&self, op: BinaryOperator, scalar: Scalar) -> EvalResult<Self> {
        let cells = self.cells
                        .iter()
                        .map(|x| x.apply(op, scalar))
                        .collect::<EvalResult<Vec<_>>>()?;
        Ok(Self { cells, ..*self })
    }

    /// Matrix-vector product.
    ///
    /// # Errors
    /// Returns `RuntimeError::DimensionMismatch` unless the column count equals
    /// the vector length.
    pub fn mul_vector(&self, vector: &Vector) -> EvalResult<Vector> {
        if self.cols != vector.len() {
            return Err(RuntimeError::DimensionMismatch {
                details: format!("cannot multiply a {} matrix by a vector of length {}",
                                 self.shape(),
                                 vector.len()),
            });
        }

        let items = self.iter_rows()
                        .map(|row| dot(row.iter().copied(), vector.items().iter().copied()))
                        .collect::<EvalResult<Vec<_>>>()?;
        Vector::new(items)
    }

    /// Matrix-matrix product.
    ///
    /// # Errors
    /// Returns `RuntimeError::DimensionMismatch` unless `self.cols ==
    /// rhs.rows`.
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::value::{matrix::Matrix, rational::Rational, scalar::Scalar};
    ///
    /// let n = |v| Scalar::from(Rational::integer(v));
    /// let a = Matrix::from_rows(vec![vec![n(1), n(2)], vec![n(3), n(4)]]).unwrap();
    /// let b = Matrix::from_rows(vec![vec![n(5), n(6)], vec![n(7), n(8)]]).unwrap();
    ///
    /// assert_eq!(a.mul_matrix(&b).unwrap().to_string(), "[\n19 22;\n43 50\n]");
    /// ```
    pub fn mul_matrix(&self, rhs: &Self) -> EvalResult<Self> {
        if self.cols != rhs.rows {
            return Err(RuntimeError::DimensionMismatch {
                details: format!("cannot multiply a {} matrix by a {} matrix",
                                 self.shape(),
                                 rhs.shape()),
            });
        }

        let mut cells = Vec::with_capacity(self.rows * rhs.cols);
        for row in self.iter_rows() {
            for col in 0..rhs.cols {
                let column = (0..rhs.rows).map(|k| rhs.cells[k * rhs.cols + col]);
                cells.push(dot(row.iter().copied(), column)?);
            }
        }

        Ok(Self { rows: self.rows,
                  cols: rhs.cols,
                  cells })
    }

    /// Swaps rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                cells.push(self.cells[row * self.cols + col]);
            }
        }

        Self { rows: self.cols,
               cols: self.rows,
               cells }
    }
}

/// Sums pairwise products, starting from exact zero so that rational inputs
/// give a rational result.
fn dot(left: impl Iterator<Item = Scalar>, right: impl Iterator<Item = Scalar>)
       -> EvalResult<Scalar> {
    left.zip(right).try_fold(Scalar::ZERO, |acc, (a, b)| {
                       let product = a.apply(BinaryOperator::Mul, b)?;
                       acc.apply(BinaryOperator::Add, product)
                   })
}

impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[")?;
        for (index, row) in self.iter_rows().enumerate() {
            if index > 0 {
                writeln!(f, ";")?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        write!(f, "\n]")
    }
}
