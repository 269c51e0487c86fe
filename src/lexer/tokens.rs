use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::KeywordDef);
        map.insert("extern", TokenKind::KeywordExtern);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,

    // Reserved
    KeywordDef,
    KeywordExtern,

    Identifier,
    Number,

    /// Any other single character, passed through verbatim.
    Punctuation(char),
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Punctuation(_) => write!(f, "Punctuation"),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// Payload attached to a token. Only identifiers and numbers carry one.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Text(String),
    Number(f64),
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.value) {
            (TokenKind::Punctuation(c), _) => write!(f, "{} ({:?})", self.kind, c),
            (_, TokenValue::Text(text)) => write!(f, "{} ({})", self.kind, text),
            (_, TokenValue::Number(value)) => write!(f, "{} ({})", self.kind, value),
            (_, TokenValue::None) => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    /// The matched text of an `Identifier` token.
    pub fn identifier(&self) -> Option<&str> {
        match (&self.kind, &self.value) {
            (TokenKind::Identifier, TokenValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// The parsed value of a `Number` token.
    pub fn number(&self) -> Option<f64> {
        match (&self.kind, &self.value) {
            (TokenKind::Number, TokenValue::Number(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
