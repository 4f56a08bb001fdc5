use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// An operand was expected but the token cannot start one.
    #[error("Syntax error at {line}:{column}: Expected an expression, found {found}.")]
    ExpectedExpression {
        /// Description of what was found instead.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column where the token starts.
        column: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Syntax error at {line}:{column}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line:   usize,
        /// The column where `)` was expected.
        column: usize,
    },
    /// An opening parenthesis `(` was expected after a function name.
    #[error("Syntax error at {line}:{column}: Expected opening parenthesis '(' but none found.")]
    ExpectedOpeningParen {
        /// The source line where the error occurred.
        line:   usize,
        /// The column where `(` was expected.
        column: usize,
    },
    /// A vector or matrix literal was not closed with `]`.
    #[error("Syntax error at {line}:{column}: Expected closing bracket ']' but none found.")]
    ExpectedClosingBracket {
        /// The source line where the error occurred.
        line:   usize,
        /// The column where `]` was expected.
        column: usize,
    },
    /// Found extra tokens after the line should have ended.
    #[error("Syntax error at {line}:{column}: Extra tokens after expression, starting at '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column where the token starts.
        column: usize,
    },
    /// A numeric literal contains something other than digits and one point.
    #[error("Syntax error at {line}:{column}: Malformed number '{literal}'.")]
    MalformedNumber {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The column where the literal starts.
        column:  usize,
    },
    /// A literal value was too large to be represented exactly.
    #[error("Syntax error at {line}:{column}: Literal '{literal}' is too large.")]
    LiteralTooLarge {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The column where the literal starts.
        column:  usize,
    },
}

impl ParseError {
    /// Returns the `(line, column)` of the error.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::ExpectedExpression { line, column, .. }
            | Self::ExpectedClosingParen { line, column }
            | Self::ExpectedOpeningParen { line, column }
            | Self::ExpectedClosingBracket { line, column }
            | Self::UnexpectedTrailingTokens { line, column, .. }
            | Self::MalformedNumber { line, column, .. }
            | Self::LiteralTooLarge { line, column, .. } => (*line, *column),
        }
    }
}
