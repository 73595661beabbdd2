use super::{Input, ParseResult};
use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::character::complete::{char, line_ending, not_line_ending, one_of, satisfy};
use nom::combinator::{eof, opt, peek, value};
use nom::multi::many0;
use nom::sequence::{pair, preceded};

/// Skip atmosphere, that is whitespace and `;` line comments.
pub fn skip_atmosphere(input: Input) -> ParseResult<()> {
    unit(many0(alt((
        unit(take_while1(|c: char| c.is_whitespace())),
        parse_line_comment,
    ))))(input)
}

fn parse_line_comment(input: Input) -> ParseResult<()> {
    unit(preceded(char(';'), pair(not_line_ending, opt(line_ending))))(input)
}

/// Succeeds without consuming input when the next character terminates a
/// token: whitespace, `(`, `)`, `"`, `;` or the end of input.
pub fn peek_delimiter(input: Input) -> ParseResult<()> {
    peek(alt((
        unit(satisfy(|c: char| c.is_whitespace())),
        unit(one_of("()\";")),
        unit(eof),
    )))(input)
}

#[inline]
pub fn unit<'a, O, F>(parser: F) -> impl FnMut(Input<'a>) -> ParseResult<'a, ()>
where
    F: FnMut(Input<'a>) -> ParseResult<'a, O>,
{
    value((), parser)
}
