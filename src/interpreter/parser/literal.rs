use std::mem;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
        value::{core::Value, matrix::Matrix, rational::Rational, scalar::Scalar, vector::Vector},
    },
    util::num::{accumulate_digits, checked_pow10},
};

impl Parser<'_> {
    /// Converts a number token to an exact rational.
    ///
    /// Integer literals become `n/1`. A decimal literal `int.frac` becomes
    /// `(int * 10^len(frac) + frac) / 10^len(frac)`, normalized, so `3.25`
    /// is `13/4`. Trailing zeros of the fractional part are ignored.
    ///
    /// # Errors
    /// - `ParseError::MalformedNumber` if the text holds anything but digits
    ///   and at most one `.`.
    /// - `ParseError::LiteralTooLarge` if the value does not fit in `i64`.
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::{lexer::tokenize, parser::core::Parser};
    ///
    /// let tokens = tokenize("3.25").unwrap();
    /// let value = Parser::parse_number(&tokens[0]).unwrap();
    /// assert_eq!(value.to_string(), "3+(1/4)");
    /// assert_eq!((value.numerator(), value.denominator()), (13, 4));
    /// ```
    pub fn parse_number(token: &Token) -> Result<Rational, ParseError> {
        let text = token.text.as_str();
        let malformed = || ParseError::MalformedNumber { literal: text.to_string(),
                                                         line:    token.line,
                                                         column:  token.column, };
        let too_large = || ParseError::LiteralTooLarge { literal: text.to_string(),
                                                         line:    token.line,
                                                         column:  token.column, };

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction.trim_end_matches('0')),
            None => (text, ""),
        };

        let whole = accumulate_digits(whole).map_err(|_| malformed())?
                                            .ok_or_else(too_large)?;
        let fraction_digits =
            accumulate_digits(fraction).map_err(|_| malformed())?
                                       .ok_or_else(too_large)?;
        let scale = checked_pow10(fraction.len()).ok_or_else(too_large)?;

        let numerator = whole.checked_mul(scale)
                             .and_then(|n| n.checked_add(fraction_digits))
                             .ok_or_else(too_large)?;

        Rational::new(numerator, scale).map_err(|_| malformed())
    }

    /// Parses the body of a vector or matrix literal; the opening `[` has
    /// already been consumed.
    ///
    /// Elements are full expressions separated by juxtaposition, `;` starts a
    /// new row and `]` closes the literal. A trailing empty row is dropped.
    /// One row gives a vector, several rows give a matrix.
    ///
    /// Grammar:
    /// ```text
    ///     matrix_literal := row (";" row)* "]"
    ///     row            := expression*
    /// ```
    ///
    /// # Errors
    /// - `ParseError::ExpectedClosingBracket` if the line ends first.
    /// - `RuntimeError::ElementMustBeScalar` for a vector or matrix element.
    /// - `RuntimeError::EmptyLiteral` if no row has any element.
    /// - `RuntimeError::RaggedMatrix` / `EmptyMatrix` for non-rectangular
    ///   input.
    pub fn parse_matrix_literal(&mut self) -> ParseResult<Value> {
        let mut rows: Vec<Vec<Scalar>> = Vec::new();
        let mut current: Vec<Scalar> = Vec::new();

        loop {
            let token = self.peek();
            match token.kind {
                TokenKind::RBracket => {
                    self.advance();
                    break;
                },
                TokenKind::Semicolon => {
                    self.advance();
                    rows.push(mem::take(&mut current));
                },
                TokenKind::End => {
                    return Err(ParseError::ExpectedClosingBracket { line:   token.line,
                                                                    column: token.column, }.into());
                },
                _ => {
                    let element = self.parse_expression()?;
                    let scalar =
                        element.as_scalar()
                               .ok_or(RuntimeError::ElementMustBeScalar { found: element.kind_name() })?;
                    current.push(scalar);
                },
            }
        }

        if !current.is_empty() {
            rows.push(current);
        }

        if rows.iter().all(Vec::is_empty) {
            return Err(RuntimeError::EmptyLiteral.into());
        }

        if rows.len() == 1 {
            let items = rows.pop().unwrap_or_default();
            Ok(Vector::new(items)?.into())
        } else {
            Ok(Matrix::from_rows(rows)?.into())
        }
    }
}
