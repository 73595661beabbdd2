use super::error::LexicalError;
use super::token::{Token, TokenKind};
use super::whitespace::peek_delimiter;
use super::{map_token, Input, ParseResult};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{one_of, satisfy};
use nom::combinator::recognize;
use nom::multi::many0;
use nom::sequence::pair;

pub const SPECIAL_INITIAL: &str = "!$%&*/:<=>?^_~";
const SPECIAL_SUBSEQUENT: &str = "+-.@";

/// Identifiers
///
/// ```grammar
/// <identifier> -> <initial> <subsequent>* | <peculiar identifier>
/// <initial>    -> <letter> | ! $ % & * / : < = > ? ^ _ ~
/// <subsequent> -> <initial> | <digit> | + - . @
/// <peculiar identifier> -> + | - | ...
/// ```
///
/// The token value is the source text lowercased; every identifier must end
/// at a delimiter.
pub fn parse(input: Input) -> ParseResult<Token> {
    map_token(parse_identifier, TokenKind::Identifier)(input)
}

fn parse_identifier(input: Input) -> ParseResult<String> {
    let (rest, text) = alt((
        recognize(pair(parse_initial, many0(parse_subsequent))),
        recognize(alt((tag("..."), tag("+"), tag("-")))),
    ))(input)?;

    if peek_delimiter(rest).is_err() {
        return LexicalError::failure("Bad identifier observed", input);
    }

    Ok((rest, text.fragment().to_lowercase()))
}

fn parse_initial(input: Input) -> ParseResult<char> {
    alt((satisfy(|c: char| c.is_alphabetic()), one_of(SPECIAL_INITIAL)))(input)
}

fn parse_subsequent(input: Input) -> ParseResult<char> {
    alt((
        parse_initial,
        satisfy(|c: char| c.is_ascii_digit()),
        one_of(SPECIAL_SUBSEQUENT),
    ))(input)
}
