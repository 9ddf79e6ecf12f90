use hasty_compiler::{CompileError, Token, TokenKind, tokenize};

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn lex_call_with_string() {
    let tokens = tokenize(r#"Text("Hi")"#).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Name, "Text"),
            Token::new(TokenKind::Paren, "("),
            Token::new(TokenKind::String, "Hi"),
            Token::new(TokenKind::Paren, ")"),
        ]
    );
}

#[test]
fn lex_brackets_and_whitespace() {
    assert_eq!(
        kinds("VStack {\n\t Text(count)\r\n}"),
        vec![
            TokenKind::Name,
            TokenKind::Bracket,
            TokenKind::Name,
            TokenKind::Paren,
            TokenKind::Name,
            TokenKind::Paren,
            TokenKind::Bracket,
        ]
    );
}

#[test]
fn lex_state_directive() {
    let tokens = tokenize("@State count = 0").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Directive, "State"),
            Token::new(TokenKind::Name, "count"),
            Token::new(TokenKind::Operator, "="),
            Token::new(TokenKind::Number, "0"),
        ]
    );
}

#[test]
fn string_keeps_content_verbatim() {
    let tokens = tokenize(r#"" a  {b} (c) @d = 1 # ""#).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, " a  {b} (c) @d = 1 # ");

    let tokens = tokenize(r#""""#).unwrap();
    assert_eq!(tokens, vec![Token::new(TokenKind::String, "")]);
}

#[test]
fn digits_and_underscores_end_a_name() {
    let tokens = tokenize("abc123def").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Name, "abc"),
            Token::new(TokenKind::Number, "123"),
            Token::new(TokenKind::Name, "def"),
        ]
    );

    let err = tokenize("my_name").unwrap_err();
    assert_eq!(
        err,
        CompileError::Lex {
            character: '_',
            position: 2
        }
    );
}

#[test]
fn number_text_is_not_normalized() {
    let tokens = tokenize("007").unwrap();
    assert_eq!(tokens, vec![Token::new(TokenKind::Number, "007")]);
}

#[test]
fn unknown_character_is_reported() {
    let err = tokenize("VStack { # }").unwrap_err();
    assert_eq!(
        err,
        CompileError::Lex {
            character: '#',
            position: 9
        }
    );
    assert!(err.to_string().contains('#'));
}

#[test]
fn unknown_character_inside_string_is_fine() {
    assert!(tokenize(r##"Text("#1")"##).is_ok());
}

#[test]
fn unterminated_string_fails() {
    let err = tokenize(r#"Text("oops)"#).unwrap_err();
    assert_eq!(err, CompileError::UnterminatedString { position: 5 });
}

#[test]
fn byte_order_mark_is_skipped() {
    let tokens = tokenize("\u{FEFF}Text(\"Hi\")").unwrap();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0], Token::new(TokenKind::Name, "Text"));
}
