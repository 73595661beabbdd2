pub mod reporting;

use crate::source::{Location, Position};
use thiserror::Error;

/// A message anchored to a location, used as a diagnostic label.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub content: String,
    pub location: Location,
}

impl Detail {
    pub fn new<C: Into<String>>(content: C, location: Location) -> Self {
        Self {
            content: content.into(),
            location,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("failure while reading source: {0}")]
    IoError(#[from] std::io::Error),
    /// A malformed token; nothing downstream of the lexer runs.
    #[error("{0}")]
    LexicalError(String, Detail),
    /// A structural mismatch at a given token.
    #[error("{0}")]
    ParseError(String, Detail),
    #[error("bug in the frontend: {0}")]
    Bug(String),
}

impl Error {
    pub fn lexical_error<M: Into<String>>(message: M, location: Location) -> Self {
        let message = message.into();
        Error::LexicalError(message.clone(), Detail::new(message, location))
    }

    pub fn parse_error<M: Into<String>>(message: M, location: Location) -> Self {
        let message = message.into();
        Error::ParseError(message.clone(), Detail::new(message, location))
    }

    pub fn bug<M: Into<String>>(message: M) -> Self {
        Error::Bug(message.into())
    }

    /// The position the error is anchored to, if it has one
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::LexicalError(_, detail) => Some(detail.location.position),
            Error::ParseError(_, detail) => Some(detail.location.position),
            _ => None,
        }
    }
}
