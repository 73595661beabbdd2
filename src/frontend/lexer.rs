pub mod error;
pub mod token;

mod boolean;
mod character;
mod identifier;
mod number;
mod punctuator;
mod string;
mod whitespace;

use crate::frontend;
use crate::source::{Location, Position, Source, SourceId};
use nom::branch::alt;
use nom::IResult;
use nom_locate::{position, LocatedSpan};
use token::{Token, TokenKind};

/// Parser definition
pub(crate) type Input<'a> = LocatedSpan<&'a str, SourceId>;
pub(crate) type ParseResult<'a, T> = IResult<Input<'a>, T, error::LexicalError<'a>>;

/// The lexer turns a source into an ordered sequence of tokens.
///
/// Tokenization either yields the whole token stream or the first
/// lexical error; a partial token list never escapes.
#[derive(Clone, Debug)]
pub struct Lexer;

impl Lexer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, source: &Source) -> frontend::Result<Vec<Token>> {
        log::trace!("tokenizing source {:?}", source.id);

        let mut input = Input::new_extra(&source.code, source.id);
        let mut tokens = vec![];

        loop {
            let (rest, _) = whitespace::skip_atmosphere(input)
                .map_err(|_| frontend::error::Error::bug("atmosphere parser can not fail"))?;

            if rest.fragment().is_empty() {
                break;
            }

            match parse_token(rest) {
                Ok((next, token)) => {
                    tokens.push(token);
                    input = next;
                }
                Err(nom::Err::Failure(e)) => return Err(e.into_error()),
                Err(nom::Err::Error(_)) => return Err(unexpected_character(rest)),
                Err(nom::Err::Incomplete(_)) => {
                    return Err(frontend::error::Error::bug(
                        "incomplete input in a complete parser",
                    ))
                }
            }
        }

        Ok(tokens)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispatch on the first character(s) of the next token.
///
/// Every alternative either backs off without consuming input or commits
/// with `nom::Err::Failure` carrying the user facing message.
fn parse_token(input: Input) -> ParseResult<Token> {
    alt((
        punctuator::parse,
        boolean::parse,
        character::parse,
        string::parse,
        number::parse,
        identifier::parse,
    ))(input)
}

fn unexpected_character(input: Input) -> frontend::error::Error {
    match input.fragment().chars().next() {
        Some(c) => frontend::error::Error::lexical_error(
            format!("Unexpected character: {}", c),
            locate(&input),
        ),
        None => frontend::error::Error::lexical_error("Unexpected end of input", locate(&input)),
    }
}

/// The location of the character the input currently points at
pub(crate) fn locate(input: &Input) -> Location {
    let offset = input.location_offset();
    let width = input
        .fragment()
        .chars()
        .next()
        .map(char::len_utf8)
        .unwrap_or(0);

    input.extra.location(
        offset..offset + width,
        Position::new(
            input.location_line() as usize - 1,
            input.get_utf8_column() - 1,
        ),
    )
}

/// Helper to create a token from a parser, capturing span and position
pub(crate) fn map_token<'a, O, F, G>(
    mut first: F,
    mut second: G,
) -> impl FnMut(Input<'a>) -> ParseResult<'a, Token>
where
    F: FnMut(Input<'a>) -> ParseResult<'a, O>,
    G: FnMut(O) -> TokenKind,
{
    move |input: Input<'a>| {
        let (s, start) = position(input)?;
        let (s, v) = first(s)?;
        let (s, end) = position(s)?;

        let location = input.extra.location(
            start.location_offset()..end.location_offset(),
            Position::new(
                start.location_line() as usize - 1,
                start.get_utf8_column() - 1,
            ),
        );

        Ok((s, Token::new(second(v), location)))
    }
}
