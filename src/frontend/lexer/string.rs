use super::error::LexicalError;
use super::token::{Token, TokenKind};
use super::{map_token, Input, ParseResult};
use nom::character::complete::{anychar, char};

/// String literals
///
/// `\"` and `\\` are the only escapes; everything else between the quotes,
/// embedded newlines included, is taken literally.
pub fn parse(input: Input) -> ParseResult<Token> {
    map_token(parse_string_literal, TokenKind::String)(input)
}

fn parse_string_literal<'a>(input: Input<'a>) -> ParseResult<'a, String> {
    let (mut rest, _) = char('"')(input)?;
    let mut value = String::new();

    loop {
        match anychar::<Input<'a>, LexicalError<'a>>(rest) {
            Ok((after, '"')) => return Ok((after, value)),
            Ok((after, '\\')) => match anychar::<Input<'a>, LexicalError<'a>>(after) {
                Ok((after, c)) if c == '"' || c == '\\' => {
                    value.push(c);
                    rest = after;
                }
                Ok((_, c)) => {
                    return LexicalError::failure(
                        format!("Unexpected escape sequence: \\{}", c),
                        after,
                    )
                }
                Err(_) => return LexicalError::failure("Unexpected end of input", input),
            },
            Ok((after, c)) => {
                value.push(c);
                rest = after;
            }
            Err(_) => return LexicalError::failure("Unexpected end of input", input),
        }
    }
}
