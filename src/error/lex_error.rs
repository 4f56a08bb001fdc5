use thiserror::Error;

/// Represents all errors that can occur while tokenizing a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("Syntax error at {line}:{column}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The column of the offending character.
        column:    usize,
    },
    /// A decimal literal immediately followed by another decimal point, as in
    /// `1.2.3`.
    #[error("Syntax error at {line}:{column}: Malformed number, unexpected second decimal point.")]
    SecondDecimalPoint {
        /// The source line where the error occurred.
        line:   usize,
        /// The column of the second decimal point.
        column: usize,
    },
}

impl LexError {
    /// Returns the `(line, column)` of the error.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::UnexpectedCharacter { line, column, .. }
            | Self::SecondDecimalPoint { line, column } => (*line, *column),
        }
    }
}
