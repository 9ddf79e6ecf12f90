use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;

use crate::error::CompileError;
use crate::token::{Token, TokenKind};

#[derive(pest_derive::Parser)]
#[grammar = "dsl.pest"]
struct DslLexer;

/// Split DSL source into tokens.
///
/// Fails on the first character that starts no token. Positions in errors
/// are byte offsets into `source`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, CompileError> {
    let mut pairs =
        DslLexer::parse(Rule::tokens, source).map_err(|e| error_at(source, &e.location))?;
    let root = pairs.next().ok_or(CompileError::UnexpectedEnd)?;
    debug_assert!(root.as_rule() == Rule::tokens);

    let mut tokens = Vec::new();
    for pair in root.into_inner() {
        if let Some(token) = token_from_pair(pair)? {
            tokens.push(token);
        }
    }
    log::trace!("lexed {} tokens", tokens.len());
    Ok(tokens)
}

fn token_from_pair(pair: Pair<Rule>) -> Result<Option<Token>, CompileError> {
    let token = match pair.as_rule() {
        Rule::bracket => Token::new(TokenKind::Bracket, pair.as_str()),
        Rule::paren => Token::new(TokenKind::Paren, pair.as_str()),
        Rule::name => Token::new(TokenKind::Name, pair.as_str()),
        Rule::number => Token::new(TokenKind::Number, pair.as_str()),
        Rule::operator => Token::new(TokenKind::Operator, pair.as_str()),
        Rule::string => Token::new(TokenKind::String, inner_text(pair)),
        Rule::directive => Token::new(TokenKind::Directive, inner_text(pair)),
        Rule::unknown => {
            let position = pair.as_span().start();
            return match pair.as_str().chars().next() {
                // a lone quote only lands here when no closing quote follows
                Some('"') => Err(CompileError::UnterminatedString { position }),
                Some(character) => Err(CompileError::Lex {
                    character,
                    position,
                }),
                None => Err(CompileError::UnexpectedEnd),
            };
        }
        _ => return Ok(None), // EOI
    };
    Ok(Some(token))
}

// `string` and `directive` wrap a single body rule holding the captured text.
fn inner_text(pair: Pair<Rule>) -> String {
    pair.into_inner()
        .next()
        .map(|p| p.as_str().to_string())
        .unwrap_or_default()
}

fn error_at(source: &str, location: &InputLocation) -> CompileError {
    let position = match location {
        InputLocation::Pos(p) => *p,
        InputLocation::Span((start, _)) => *start,
    };
    match source.get(position..).and_then(|rest| rest.chars().next()) {
        Some(character) => CompileError::Lex {
            character,
            position,
        },
        None => CompileError::UnexpectedEnd,
    }
}
