use crate::interpreter::{
    lexer::TokenKind,
    parser::core::{ParseResult, Parser},
    value::core::{BinaryOperator, Value},
};

/// Maps a token to the binary operator it denotes.
const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses and evaluates addition and subtraction.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub fn parse_additive(&mut self) -> ParseResult<Value> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op @ (BinaryOperator::Add | BinaryOperator::Sub)) =
            token_to_binary_operator(self.peek().kind)
        {
            self.advance();
            let right = self.parse_multiplicative()?;
            left = left.apply(op, &right)?;
        }
        Ok(left)
    }

    /// Parses and evaluates multiplication and division.
    ///
    /// Handles left-associative operators: `*` and `/`.
    ///
    /// `scalar * vector` and `scalar * matrix` are evaluated as `vector *
    /// scalar` and `matrix * scalar`, so that scaling is commutative. Division
    /// is never swapped.
    ///
    /// The rule is: `multiplicative := unary (("*" | "/") unary)*`
    pub fn parse_multiplicative(&mut self) -> ParseResult<Value> {
        let mut left = self.parse_unary()?;
        while let Some(op @ (BinaryOperator::Mul | BinaryOperator::Div)) =
            token_to_binary_operator(self.peek().kind)
        {
            self.advance();
            let right = self.parse_unary()?;
            left = if op == BinaryOperator::Mul && left.is_scalar() && right.is_tensor() {
                right.mul(&left)?
            } else {
                left.apply(op, &right)?
            };
        }
        Ok(left)
    }
}
