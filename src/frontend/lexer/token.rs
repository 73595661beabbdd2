use crate::source::{HasSourceLocation, Location};
use std::fmt::{self, Formatter};

/// A single lexeme together with where it came from.
///
/// The location's span ends one past the token's last character, which is
/// the offset the lexer resumes at.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    location: Location,
}

impl Token {
    pub fn new(kind: TokenKind, location: Location) -> Self {
        Self { kind, location }
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn end_index(&self) -> usize {
        self.location.span.end()
    }

    pub fn is_punctuator(&self, expected: Punctuator) -> bool {
        matches!(&self.kind, TokenKind::Punctuator(p) if *p == expected)
    }
}

impl HasSourceLocation for Token {
    fn source_location(&self) -> &Location {
        &self.location
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Boolean(bool),
    Character(char),
    String(String),
    Number(f64),
    Identifier(String),
    Punctuator(Punctuator),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuator {
    LeftParen,
    RightParen,
    /// `#(`
    OpenVector,
    Quote,
    Quasiquote,
    Unquote,
    UnquoteSplicing,
    Dot,
}

impl fmt::Display for Punctuator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Punctuator::LeftParen => "(",
            Punctuator::RightParen => ")",
            Punctuator::OpenVector => "#(",
            Punctuator::Quote => "'",
            Punctuator::Quasiquote => "`",
            Punctuator::Unquote => ",",
            Punctuator::UnquoteSplicing => ",@",
            Punctuator::Dot => ".",
        };
        f.write_str(repr)
    }
}
