use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A binary operator was applied to an unsupported pair of value kinds.
    #[error("Operation '{op}' is not supported between {left} and {right}.")]
    UnsupportedOperation {
        /// The operator symbol.
        op:    &'static str,
        /// Kind of the left operand.
        left:  &'static str,
        /// Kind of the right operand.
        right: &'static str,
    },
    /// A unary operation was applied to an unsupported value kind.
    #[error("Operation '{op}' is not supported for {operand}.")]
    UnsupportedUnaryOperation {
        /// The operation name.
        op:      &'static str,
        /// Kind of the operand.
        operand: &'static str,
    },
    /// Operand shapes are incompatible.
    #[error("Dimension mismatch: {details}.")]
    DimensionMismatch {
        /// Description of both shapes.
        details: String,
    },
    /// Attempted division by zero, or construction of a rational with a zero
    /// denominator.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Tried to use a variable that was never assigned.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that does not exist.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// A vector or matrix literal contained a non-scalar element.
    #[error("Vector and matrix elements must be scalars, found {found}.")]
    ElementMustBeScalar {
        /// Kind of the offending element.
        found: &'static str,
    },
    /// A vector or matrix literal had no elements at all.
    #[error("Empty vector or matrix literal.")]
    EmptyLiteral,
    /// Tried to build a vector without elements.
    #[error("A vector must have at least one element.")]
    EmptyVector,
    /// Tried to build a matrix without rows or columns.
    #[error("A matrix must have at least one row and one column.")]
    EmptyMatrix,
    /// Matrix rows differ in length.
    #[error("All matrix rows must have the same length: row {row} has {found} elements, expected {expected}.")]
    RaggedMatrix {
        /// Index of the first offending row (1-based).
        row:      usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found:    usize,
    },
    /// Exact arithmetic left the `i64` range.
    #[error("Integer overflow while trying to compute result.")]
    Overflow,
}
