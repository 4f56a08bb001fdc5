use log::trace;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        builtin,
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        value::{core::Value, rational::Rational},
    },
};

impl Parser<'_> {
    /// Parses and evaluates a unary expression.
    ///
    /// Negation is right-associative and is evaluated as `0 - operand`, so it
    /// follows exactly the promotion rules of subtraction.
    ///
    /// Grammar:
    /// ```text
    ///     unary := "-" unary
    ///            | primary
    /// ```
    pub fn parse_unary(&mut self) -> ParseResult<Value> {
        if self.match_kind(TokenKind::Minus) {
            let operand = self.parse_unary()?;
            return Ok(Value::from(Rational::ZERO).sub(&operand)?);
        }
        self.parse_primary()
    }

    /// Parses and evaluates a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | IDENT
    ///              | IDENT "(" expression ")"
    ///              | "(" expression ")"
    ///              | "[" matrix_literal "]"
    /// ```
    pub fn parse_primary(&mut self) -> ParseResult<Value> {
        let token = self.peek();

        match token.kind {
            TokenKind::Number => {
                self.advance();
                Ok(Self::parse_number(token)?.into())
            },
            TokenKind::Identifier => {
                self.advance();
                if self.peek().kind == TokenKind::LParen {
                    self.parse_function_call(&token.text)
                } else {
                    Ok(self.environment().lookup(&token.text)?)
                }
            },
            TokenKind::LParen => {
                self.advance();
                let value = self.parse_expression()?;
                self.expect_closing_paren()?;
                Ok(value)
            },
            TokenKind::LBracket => {
                self.advance();
                self.parse_matrix_literal()
            },
            _ => Err(ParseError::ExpectedExpression { found:  token.display_text(),
                                                      line:   token.line,
                                                      column: token.column, }.into()),
        }
    }

    /// Parses a call `name "(" expression ")"` and applies the built-in.
    ///
    /// The argument is evaluated before the name is resolved.
    fn parse_function_call(&mut self, name: &str) -> ParseResult<Value> {
        let open = self.peek();
        if !self.match_kind(TokenKind::LParen) {
            return Err(ParseError::ExpectedOpeningParen { line:   open.line,
                                                          column: open.column, }.into());
        }
        let argument = self.parse_expression()?;
        self.expect_closing_paren()?;

        trace!("calling {name} on a {}", argument.kind_name());

        let function =
            builtin::lookup(name).ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?;
        Ok(function(&argument)?)
    }

    fn expect_closing_paren(&mut self) -> ParseResult<()> {
        let token = self.peek();
        if self.match_kind(TokenKind::RParen) {
            Ok(())
        } else {
            Err(ParseError::ExpectedClosingParen { line:   token.line,
                                                   column: token.column, }.into())
        }
    }
}
