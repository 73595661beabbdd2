use super::error::LexicalError;
use super::token::{Token, TokenKind};
use super::whitespace::peek_delimiter;
use super::{map_token, Input, ParseResult};
use nom::branch::alt;
use nom::character::complete::{char, digit0, digit1, one_of};
use nom::combinator::{opt, peek, recognize};
use nom::sequence::{pair, tuple};

/// Decimal number literals
///
/// ```grammar
/// <number> -> <sign>? (<digits> ('.' <digits>?)? | '.' <digits>)
/// ```
///
/// The value is the decoded IEEE-754 double. A bare sign or a bare dot is
/// not a number; the lexer backs off and retries the identifier rule.
pub fn parse(input: Input) -> ParseResult<Token> {
    map_token(parse_number, TokenKind::Number)(input)
}

fn parse_number(input: Input) -> ParseResult<f64> {
    // commit only when the sign is followed by a digit or a leading decimal
    let (_, _) = peek(pair(
        opt(one_of("+-")),
        alt((digit1, recognize(pair(char('.'), digit1)))),
    ))(input)?;

    let decimal = alt((
        recognize(tuple((digit1, opt(pair(char('.'), digit0))))),
        recognize(pair(char('.'), digit1)),
    ));
    let (rest, text) = recognize(pair(opt(one_of("+-")), decimal))(input)?;

    if peek_delimiter(rest).is_err() {
        return LexicalError::failure("Bad number observed", input);
    }

    match text.fragment().parse::<f64>() {
        Ok(value) => Ok((rest, value)),
        Err(_) => LexicalError::failure("Bad number observed", input),
    }
}
