use crate::{
    error::{Error, ParseError},
    interpreter::{
        environment::Environment,
        lexer::{Token, TokenKind},
        value::core::Value,
    },
};

/// Result type used by the parser.
///
/// Parsing and evaluation are interleaved, so a parse routine can fail with a
/// parse error as well as with a runtime error from the operation it just
/// evaluated.
pub type ParseResult<T> = Result<T, Error>;

/// A cursor over the tokens of one line that evaluates as it parses.
///
/// The parser reads variables from the environment but never writes to it;
/// committing an assignment is left to the caller, once the whole line has
/// evaluated successfully.
pub struct Parser<'a> {
    tokens:      &'a [Token],
    position:    usize,
    environment: &'a Environment,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token.
    ///
    /// `tokens` must end with a [`TokenKind::End`] token, as produced by
    /// [`tokenize`](crate::interpreter::lexer::tokenize).
    #[must_use]
    pub const fn new(tokens: &'a [Token], environment: &'a Environment) -> Self {
        Self { tokens,
               position: 0,
               environment }
    }

    /// The environment variable references are resolved against.
    pub(in crate::interpreter::parser) const fn environment(&self) -> &'a Environment {
        self.environment
    }

    /// Returns the current token without consuming it.
    ///
    /// Past the end, the final `End` token is returned again.
    ///
    /// # Panics
    /// Panics if the token slice is empty.
    #[must_use]
    pub fn peek(&self) -> &'a Token {
        self.peek_nth(0)
    }

    /// Returns the token `n` places ahead of the current one.
    fn peek_nth(&self, n: usize) -> &'a Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[(self.position + n).min(last)]
    }

    /// Consumes and returns the current token. `End` is never consumed.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if token.kind != TokenKind::End {
            self.position += 1;
        }
        token
    }

    /// Consumes the current token if it has the given kind.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns `true` once only the `End` token remains.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.peek().kind == TokenKind::End
    }

    /// Consumes the name and `=` of an assignment and returns the name.
    ///
    /// Needs two tokens of lookahead: `IDENT '='`. Returns `None` and consumes
    /// nothing if the line does not start that way.
    pub fn assignment_target(&mut self) -> Option<&'a str> {
        let name = self.peek();
        if name.kind == TokenKind::Identifier && self.peek_nth(1).kind == TokenKind::Equals {
            self.position += 2;
            Some(&name.text)
        } else {
            None
        }
    }

    /// Fails with `UnexpectedTrailingTokens` unless only `End` remains.
    pub fn expect_end(&self) -> ParseResult<()> {
        let token = self.peek();
        if token.kind == TokenKind::End {
            Ok(())
        } else {
            Err(ParseError::UnexpectedTrailingTokens { token:  token.display_text(),
                                                       line:   token.line,
                                                       column: token.column, }.into())
        }
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, addition, and recursively descends through the
    /// precedence hierarchy.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    pub fn parse_expression(&mut self) -> ParseResult<Value> {
        self.parse_additive()
    }
}
