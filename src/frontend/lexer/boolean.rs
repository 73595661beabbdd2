use super::token::{Token, TokenKind};
use super::{map_token, Input, ParseResult};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::value;

/// Boolean literals `#t` and `#f`
pub fn parse(input: Input) -> ParseResult<Token> {
    let boolean = alt((value(true, tag("#t")), value(false, tag("#f"))));

    map_token(boolean, TokenKind::Boolean)(input)
}

#[cfg(test)]
mod tests {
    use crate::frontend::lexer::tests::*;
    use crate::frontend::lexer::token::TokenKind;

    #[test]
    fn test_read_boolean() {
        assert_tokenizes_as("#t", vec![TokenKind::Boolean(true)]);
        assert_tokenizes_as("#f", vec![TokenKind::Boolean(false)]);
        assert_tokenizes_as(
            "#t #f",
            vec![TokenKind::Boolean(true), TokenKind::Boolean(false)],
        );
    }
}
