use super::token::{Punctuator, Token, TokenKind};
use super::whitespace::peek_delimiter;
use super::{map_token, Input, ParseResult};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::char;
use nom::combinator::value;
use nom::sequence::terminated;

/// Punctuators `( ) #( ' ` , ,@ .`
///
/// A `.` is only a punctuator when a delimiter follows; otherwise the
/// number and identifier rules get their turn.
pub fn parse(input: Input) -> ParseResult<Token> {
    map_token(parse_punctuator, TokenKind::Punctuator)(input)
}

fn parse_punctuator(input: Input) -> ParseResult<Punctuator> {
    alt((
        value(Punctuator::OpenVector, tag("#(")),
        value(Punctuator::LeftParen, char('(')),
        value(Punctuator::RightParen, char(')')),
        value(Punctuator::Quote, char('\'')),
        value(Punctuator::Quasiquote, char('`')),
        value(Punctuator::UnquoteSplicing, tag(",@")),
        value(Punctuator::Unquote, char(',')),
        terminated(value(Punctuator::Dot, char('.')), peek_delimiter),
    ))(input)
}

#[cfg(test)]
mod tests {
    use crate::frontend::lexer::tests::*;
    use crate::frontend::lexer::token::{Punctuator, TokenKind};

    #[test]
    fn test_read_punctuators() {
        assert_tokenizes_as(
            "()",
            vec![
                TokenKind::Punctuator(Punctuator::LeftParen),
                TokenKind::Punctuator(Punctuator::RightParen),
            ],
        );
        assert_tokenizes_as("#(", vec![TokenKind::Punctuator(Punctuator::OpenVector)]);
        assert_tokenizes_as("'", vec![TokenKind::Punctuator(Punctuator::Quote)]);
        assert_tokenizes_as("`", vec![TokenKind::Punctuator(Punctuator::Quasiquote)]);
        assert_tokenizes_as(",", vec![TokenKind::Punctuator(Punctuator::Unquote)]);
        assert_tokenizes_as(",@", vec![TokenKind::Punctuator(Punctuator::UnquoteSplicing)]);
    }

    #[test]
    fn test_dot_needs_a_delimiter() {
        assert_tokenizes_as(". ", vec![TokenKind::Punctuator(Punctuator::Dot)]);
        assert_tokenizes_as(
            "(a . b)",
            vec![
                TokenKind::Punctuator(Punctuator::LeftParen),
                TokenKind::Identifier("a".into()),
                TokenKind::Punctuator(Punctuator::Dot),
                TokenKind::Identifier("b".into()),
                TokenKind::Punctuator(Punctuator::RightParen),
            ],
        );
        // not a punctuator: a leading decimal
        assert_tokenizes_as(".5", vec![TokenKind::Number(0.5)]);
    }
}
