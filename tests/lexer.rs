use ratmat::{
    error::LexError,
    interpreter::lexer::{TokenKind, tokenize},
};
use rstest::rstest;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap()
                    .iter()
                    .map(|t| t.kind)
                    .collect()
}

#[rstest]
#[case("", vec![TokenKind::End])]
#[case("   \t", vec![TokenKind::End])]
#[case("42", vec![TokenKind::Number, TokenKind::End])]
#[case("3.25", vec![TokenKind::Number, TokenKind::End])]
#[case(".5", vec![TokenKind::Number, TokenKind::End])]
#[case("a_b9", vec![TokenKind::Identifier, TokenKind::End])]
#[case("2x", vec![TokenKind::Number, TokenKind::Identifier, TokenKind::End])]
#[case("T(M)",
       vec![TokenKind::Identifier, TokenKind::LParen, TokenKind::Identifier, TokenKind::RParen,
            TokenKind::End])]
#[case("[1;2]",
       vec![TokenKind::LBracket, TokenKind::Number, TokenKind::Semicolon, TokenKind::Number,
            TokenKind::RBracket, TokenKind::End])]
#[case("+-*/=",
       vec![TokenKind::Plus, TokenKind::Minus, TokenKind::Star, TokenKind::Slash,
            TokenKind::Equals, TokenKind::End])]
fn token_kinds(#[case] source: &str, #[case] expected: Vec<TokenKind>) {
    assert_eq!(kinds(source), expected);
}

#[rstest]
#[case("$", '$', 1)]
#[case("1 + #", '#', 5)]
#[case(".", '.', 1)]
#[case("1.", '.', 2)]
#[case("5. + 1", '.', 2)]
#[case("x ^ 2", '^', 3)]
fn unexpected_characters(#[case] source: &str, #[case] character: char, #[case] column: usize) {
    assert_eq!(tokenize(source),
               Err(LexError::UnexpectedCharacter { character,
                                                   line: 1,
                                                   column }));
}

#[rstest]
#[case("1.2.3", 4)]
#[case("x = .5.5", 7)]
fn second_decimal_point(#[case] source: &str, #[case] column: usize) {
    assert_eq!(tokenize(source),
               Err(LexError::SecondDecimalPoint { line: 1, column }));
}

#[test]
fn columns_count_from_one() {
    let tokens = tokenize("V1 = [ 1 2.5 ]").unwrap();
    let columns: Vec<_> = tokens.iter().map(|t| t.column).collect();
    assert_eq!(columns, vec![1, 4, 6, 8, 10, 14, 15]);
    assert_eq!(tokens[0].text, "V1");
    assert!(tokens.last().unwrap().text.is_empty());
}

#[test]
fn newlines_advance_the_line() {
    let tokens = tokenize("x\n  y").unwrap();
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
    assert_eq!(tokens[2].kind, TokenKind::End);
    assert_eq!(tokens[2].line, 2);

    assert_eq!(tokenize("1\n$"),
               Err(LexError::UnexpectedCharacter { character: '$',
                                                   line:      2,
                                                   column:    1, }));
}

#[test]
fn end_token_is_described() {
    let tokens = tokenize("1").unwrap();
    assert_eq!(tokens[1].display_text(), "end of input");
    assert_eq!(tokens[0].display_text(), "1");
}
