use log::trace;
use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// All kinds except [`TokenKind::End`] are produced by the logos lexer; `End`
/// is appended once the input is exhausted.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `3`, `3.25` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?", reject_second_point)]
    #[regex(r"\.[0-9]+", reject_second_point)]
    Number,
    /// Identifier tokens; variable or function names such as `V1` or `T`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\x0B\x0C]+", logos::skip)]
    Ignored,
    /// End of input.
    End,
}

impl TokenKind {
    /// A short human-readable description, used in error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Semicolon => "';'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Equals => "'='",
            Self::NewLine => "line break",
            Self::Ignored => "whitespace",
            Self::End => "end of input",
        }
    }
}

/// A token together with its source text and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The exact source text; empty for [`TokenKind::End`].
    pub text:   String,
    /// 1-based line number.
    pub line:   usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Token {
    /// Renders the token for error messages: its text, or its description when
    /// it has none.
    #[must_use]
    pub fn display_text(&self) -> String {
        if self.text.is_empty() {
            self.kind.describe().to_string()
        } else {
            self.text.clone()
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset where that line starts,
/// from which token columns are computed.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Failure reasons reported from inside the logos lexer. Positions are
/// attached afterwards by [`tokenize`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No token starts with the current character.
    #[default]
    UnexpectedCharacter,
    /// A decimal literal was directly followed by another `.`.
    SecondDecimalPoint,
}

/// Rejects a decimal literal that runs into a second decimal point, as in
/// `1.2.3`.
fn reject_second_point(lex: &logos::Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    if lex.slice().contains('.') && lex.remainder().starts_with('.') {
        Err(LexErrorKind::SecondDecimalPoint)
    } else {
        Ok(())
    }
}

/// Converts one line of source text into tokens.
///
/// The returned sequence always ends with exactly one [`TokenKind::End`]
/// token.
///
/// # Errors
/// - `LexError::UnexpectedCharacter` for a character that starts no token.
/// - `LexError::SecondDecimalPoint` for a decimal literal followed by `.`.
///
/// # Example
/// ```
/// use ratmat::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("V = [ 1 2.5 ]").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Identifier,
///                 TokenKind::Equals,
///                 TokenKind::LBracket,
///                 TokenKind::Number,
///                 TokenKind::Number,
///                 TokenKind::RBracket,
///                 TokenKind::End]);
/// assert_eq!(tokens[4].text, "2.5");
/// assert_eq!(tokens[4].column, 9);
///
/// assert!(tokenize("1 $ 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras::default());
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let line = lexer.extras.line;
        let column_of = |offset: usize| column_at(source, lexer.extras.line_start, offset);

        match result {
            Ok(kind) => tokens.push(Token { kind,
                                            text: lexer.slice().to_string(),
                                            line,
                                            column: column_of(span.start) }),
            Err(LexErrorKind::UnexpectedCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(LexError::UnexpectedCharacter { character,
                                                           line,
                                                           column: column_of(span.start) });
            },
            Err(LexErrorKind::SecondDecimalPoint) => {
                return Err(LexError::SecondDecimalPoint { line,
                                                          column: column_of(span.end) });
            },
        }
    }

    tokens.push(Token { kind:   TokenKind::End,
                        text:   String::new(),
                        line:   lexer.extras.line,
                        column: column_at(source, lexer.extras.line_start, source.len()), });

    trace!("tokenized {:?} into {} tokens", source, tokens.len());

    Ok(tokens)
}

/// 1-based character column of byte `offset` on the line starting at byte
/// `line_start`.
fn column_at(source: &str, line_start: usize, offset: usize) -> usize {
    source.get(line_start..offset)
          .map_or(offset.saturating_sub(line_start), |s| s.chars().count())
    + 1
}
