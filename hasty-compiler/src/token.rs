use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Bracket,   // { }
    Paren,     // ( )
    String,    // "..." (quotes stripped)
    Name,      // letters only
    Number,    // digits only
    Directive, // @State (the `@` is stripped)
    Operator,  // =
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Bracket => "bracket",
            TokenKind::Paren => "paren",
            TokenKind::String => "string",
            TokenKind::Name => "name",
            TokenKind::Number => "number",
            TokenKind::Directive => "directive",
            TokenKind::Operator => "operator",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn is_opening(&self) -> bool {
        matches!(
            (self.kind, self.value.as_str()),
            (TokenKind::Paren, "(") | (TokenKind::Bracket, "{")
        )
    }

    /// The delimiter that closes this token, if it opens a call body.
    pub fn closing(&self) -> Option<&'static str> {
        match (self.kind, self.value.as_str()) {
            (TokenKind::Paren, "(") => Some(")"),
            (TokenKind::Bracket, "{") => Some("}"),
            _ => None,
        }
    }
}
