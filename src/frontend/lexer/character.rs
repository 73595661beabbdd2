use super::error::LexicalError;
use super::token::{Token, TokenKind};
use super::whitespace::peek_delimiter;
use super::{map_token, Input, ParseResult};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::anychar;
use nom::combinator::value;
use nom::sequence::terminated;

/// Character literals
///
/// `#\space` and `#\newline` are the named spellings; otherwise exactly one
/// character follows `#\`. Either way the literal must end at a delimiter.
pub fn parse(input: Input) -> ParseResult<Token> {
    map_token(parse_char_literal, TokenKind::Character)(input)
}

fn parse_char_literal(input: Input) -> ParseResult<char> {
    let (rest, _) = tag("#\\")(input)?;

    if let Ok((rest, c)) = parse_named_literal(rest) {
        return Ok((rest, c));
    }

    match anychar::<Input, LexicalError>(rest) {
        Ok((after, c)) => match peek_delimiter(after) {
            // a literal newline reads as the newline character
            Ok(_) => Ok((after, c)),
            Err(_) => LexicalError::failure("Bad character constant", input),
        },
        Err(_) => LexicalError::failure("Unexpected end of input", input),
    }
}

fn parse_named_literal(input: Input) -> ParseResult<char> {
    terminated(
        alt((value(' ', tag("space")), value('\n', tag("newline")))),
        peek_delimiter,
    )(input)
}

#[cfg(test)]
mod tests {
    use crate::frontend::lexer::tests::*;
    use crate::frontend::lexer::token::TokenKind;

    #[test]
    fn test_read_char_literal() {
        assert_tokenizes_as("#\\a", vec![TokenKind::Character('a')]);
        assert_tokenizes_as("#\\Z", vec![TokenKind::Character('Z')]);
        assert_tokenizes_as("#\\☆", vec![TokenKind::Character('☆')]);
        assert_tokenizes_as("#\\(", vec![TokenKind::Character('(')]);
    }

    #[test]
    fn test_read_char_named_literal() {
        assert_tokenizes_as("#\\space", vec![TokenKind::Character(' ')]);
        assert_tokenizes_as("#\\newline", vec![TokenKind::Character('\n')]);
        // a literal newline after the prefix is the newline character
        assert_tokenizes_as("#\\\n", vec![TokenKind::Character('\n')]);
    }

    #[test]
    fn test_read_char_single_even_when_name_prefix() {
        // `s` followed by a delimiter is just the character s
        assert_tokenizes_as("#\\s", vec![TokenKind::Character('s')]);
        assert_tokenizes_as(
            "#\\space s",
            vec![TokenKind::Character(' '), TokenKind::Identifier("s".into())],
        );
    }

    #[test]
    fn test_bad_character_constant() {
        assert_lex_error("#\\foo", "Bad character constant");
        assert_lex_error("#\\spacex", "Bad character constant");
        assert_lex_error("#\\", "Unexpected end of input");
    }
}
