use thiserror::Error;

use crate::token::TokenKind;

/// Pipeline stage an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lex,
    Parse,
    Generate,
}

/// Every way a compile can fail. The first error aborts the whole compile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A character that starts no token.
    #[error("I don't know this character: {character:?} (at byte {position})")]
    Lex { character: char, position: usize },

    /// A `"` with no closing quote before the end of input.
    #[error("unterminated string literal starting at byte {position}")]
    UnterminatedString { position: usize },

    /// A token that matches no grammar production where it appears.
    #[error("I don't understand this token: {kind}: {value}")]
    Parse { kind: TokenKind, value: String },

    /// Any `@directive` other than `@State`.
    #[error("unsupported directive: @{name}")]
    UnsupportedDirective { name: String },

    /// Tokens ran out inside a call body or a state declaration.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// Calls nested deeper than the parser accepts.
    #[error("calls nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },

    /// A call whose name has no entry in the component registry.
    #[error("no component defined for {name}")]
    UnknownComponent { name: String },
}

impl CompileError {
    pub fn stage(&self) -> Stage {
        match self {
            CompileError::Lex { .. } | CompileError::UnterminatedString { .. } => Stage::Lex,
            CompileError::Parse { .. }
            | CompileError::UnsupportedDirective { .. }
            | CompileError::UnexpectedEnd
            | CompileError::NestingTooDeep { .. } => Stage::Parse,
            CompileError::UnknownComponent { .. } => Stage::Generate,
        }
    }
}
