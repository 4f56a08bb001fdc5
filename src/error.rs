use thiserror::Error;

/// Lexing errors.
///
/// Raised by the tokenizer when a character cannot start any token, or when a
/// decimal literal is followed by a second decimal point.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while consuming the token stream:
/// missing brackets, unexpected or trailing tokens and malformed numeric
/// literals. Every variant carries the line and column of the offending token.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating values:
/// unsupported operand kinds, dimension mismatches, division by zero,
/// undefined names and malformed vector/matrix literals. Runtime errors carry a
/// message only.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while executing a single line.
///
/// Every variant aborts the current line only; the interpreter's environment
/// is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The line could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream does not follow the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A well-formed expression could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the `(line, column)` the error points at, if it has one.
    ///
    /// Runtime errors are detected after a sub-expression has been evaluated
    /// and carry no position.
    #[must_use]
    pub const fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => Some(e.position()),
            Self::Runtime(_) => None,
        }
    }
}
