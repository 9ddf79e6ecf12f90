use crate::ast::{Program, Statement};
use crate::error::CompileError;
use crate::token::{Token, TokenKind};

/// Recursive-descent parser over a token slice with one token of lookahead.
///
/// ```text
/// Program          := Statement*
/// Statement        := STRING | NUMBER | NAME | CallExpression | StateDeclaration
/// CallExpression   := NAME ( '(' Statement* ')' | '{' Statement* '}' )
/// StateDeclaration := '@State' NAME '=' (STRING | NUMBER)
/// ```
/// Deepest call nesting accepted. Every later stage recurses once per level,
/// so this also bounds their stack use.
pub const MAX_NESTING: usize = 256;

pub fn parse(tokens: &[Token]) -> Result<Program, CompileError> {
    let mut parser = Parser {
        tokens,
        current: 0,
        depth: 0,
    };
    let mut body = Vec::new();
    while parser.peek().is_some() {
        body.push(parser.statement()?);
    }
    log::trace!("parsed {} top-level statements", body.len());
    Ok(Program { body })
}

struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    depth: usize, // calls currently open
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    fn peek_next(&self) -> Option<&'a Token> {
        self.tokens.get(self.current + 1)
    }

    fn advance(&mut self) -> Result<&'a Token, CompileError> {
        let token = self.peek().ok_or(CompileError::UnexpectedEnd)?;
        self.current += 1;
        Ok(token)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, CompileError> {
        let token = self.advance()?;
        if token.kind != kind {
            return Err(unexpected(token));
        }
        Ok(token)
    }

    fn statement(&mut self) -> Result<Statement, CompileError> {
        let token = self.peek().ok_or(CompileError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::String => {
                self.current += 1;
                Ok(Statement::StringLiteral(token.value.clone()))
            }
            TokenKind::Number => {
                self.current += 1;
                Ok(Statement::NumberLiteral(token.value.clone()))
            }
            // a name is a call only when `(` or `{` follows it directly
            TokenKind::Name if self.peek_next().is_some_and(Token::is_opening) => self.call(),
            TokenKind::Name => {
                self.current += 1;
                Ok(Statement::Identifier(token.value.clone()))
            }
            TokenKind::Directive => self.directive(),
            _ => Err(unexpected(token)),
        }
    }

    fn call(&mut self) -> Result<Statement, CompileError> {
        let name = self.expect(TokenKind::Name)?.value.clone();
        let open = self.advance()?;
        let close = open.closing().ok_or_else(|| unexpected(open))?;

        if self.depth == MAX_NESTING {
            return Err(CompileError::NestingTooDeep { limit: MAX_NESTING });
        }
        self.depth += 1;

        let mut params = Vec::new();
        loop {
            let token = self.peek().ok_or(CompileError::UnexpectedEnd)?;
            if token.kind == open.kind && token.value == close {
                self.current += 1;
                break;
            }
            params.push(self.statement()?);
        }
        self.depth -= 1;
        Ok(Statement::CallExpression { name, params })
    }

    fn directive(&mut self) -> Result<Statement, CompileError> {
        let directive = self.expect(TokenKind::Directive)?;
        if directive.value != "State" {
            return Err(CompileError::UnsupportedDirective {
                name: directive.value.clone(),
            });
        }

        let name = self.expect(TokenKind::Name)?.value.clone();
        self.expect(TokenKind::Operator)?;
        let value = self.advance()?;
        match value.kind {
            TokenKind::String | TokenKind::Number => Ok(Statement::StateDeclaration {
                name,
                value: value.value.clone(),
            }),
            _ => Err(unexpected(value)),
        }
    }
}

fn unexpected(token: &Token) -> CompileError {
    CompileError::Parse {
        kind: token.kind,
        value: token.value.clone(),
    }
}
