use super::{locate, Input, ParseResult};
use crate::frontend::error::Error;
use nom::error::ErrorKind;

/// The error type threaded through the token parsers.
///
/// Backtrackable failures carry no message; committed failures
/// (`nom::Err::Failure`) carry the user facing message for the token that
/// was recognized but malformed.
#[derive(Debug)]
pub struct LexicalError<'a> {
    message: Option<String>,
    input: Input<'a>,
}

impl<'a> LexicalError<'a> {
    pub fn new<M: Into<String>>(message: M, input: Input<'a>) -> Self {
        Self {
            message: Some(message.into()),
            input,
        }
    }

    /// Commit the current token alternative with `message`.
    pub fn failure<T, M: Into<String>>(message: M, input: Input<'a>) -> ParseResult<'a, T> {
        Err(nom::Err::Failure(Self::new(message, input)))
    }

    pub fn into_error(self) -> Error {
        let location = locate(&self.input);
        match self.message {
            Some(message) => Error::lexical_error(message, location),
            None => match self.input.fragment().chars().next() {
                Some(c) => {
                    Error::lexical_error(format!("Unexpected character: {}", c), location)
                }
                None => Error::lexical_error("Unexpected end of input", location),
            },
        }
    }
}

impl<'a> nom::error::ParseError<Input<'a>> for LexicalError<'a> {
    fn from_error_kind(input: Input<'a>, _kind: ErrorKind) -> Self {
        Self {
            message: None,
            input,
        }
    }

    fn append(_input: Input<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}
