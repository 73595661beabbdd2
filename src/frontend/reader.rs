pub mod datum;

#[cfg(test)]
pub mod arbitrary;

use crate::frontend;
use crate::frontend::error::Error;
use crate::frontend::lexer::token::{Punctuator, Token, TokenKind};
use crate::frontend::lexer::Lexer;
use crate::source::{HasSourceLocation, Location, Source};
use datum::Datum;

/// The reader recognizes the external representation of scheme values.
///
/// It consumes the token stream the lexer produced and builds datums,
/// which are the input to the program parser and to every tool that wants
/// an s-expression view of the source.
#[derive(Clone, Debug)]
pub struct Reader;

impl Reader {
    pub fn new() -> Self {
        Self
    }

    /// Read all datums from `source`
    pub fn parse(&self, source: &Source) -> frontend::Result<Vec<Datum>> {
        let tokens = Lexer::new().tokenize(source)?;
        read_program(&tokens)
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read datums until the token stream is exhausted
pub fn read_program(tokens: &[Token]) -> frontend::Result<Vec<Datum>> {
    let mut datums = vec![];
    let mut cursor = 0;

    while cursor < tokens.len() {
        let (datum, next) = read_datum(tokens, cursor)?;
        datums.push(datum);
        cursor = next;
    }

    Ok(datums)
}

/// Read exactly one datum starting at `cursor`.
///
/// Returns the datum and the cursor one past its last token.
pub fn read_datum(tokens: &[Token], cursor: usize) -> frontend::Result<(Datum, usize)> {
    let token = tokens
        .get(cursor)
        .ok_or_else(|| end_of_input(tokens))?;
    let location = token.source_location().clone();

    match token.kind() {
        TokenKind::Boolean(v) => Ok((Datum::boolean(*v, location), cursor + 1)),
        TokenKind::Number(v) => Ok((Datum::number(*v, location), cursor + 1)),
        TokenKind::Character(v) => Ok((Datum::character(*v, location), cursor + 1)),
        TokenKind::String(v) => Ok((Datum::string(v.clone(), location), cursor + 1)),
        TokenKind::Identifier(v) => Ok((Datum::symbol(v.clone(), location), cursor + 1)),
        TokenKind::Punctuator(Punctuator::LeftParen) => read_list(tokens, cursor),
        TokenKind::Punctuator(Punctuator::OpenVector) => read_vector(tokens, cursor),
        TokenKind::Punctuator(Punctuator::Quote) => {
            read_abbreviation(tokens, cursor, Datum::quote)
        }
        TokenKind::Punctuator(Punctuator::Quasiquote) => {
            read_abbreviation(tokens, cursor, Datum::quasiquote)
        }
        TokenKind::Punctuator(Punctuator::Unquote) => {
            read_abbreviation(tokens, cursor, Datum::unquote)
        }
        TokenKind::Punctuator(Punctuator::UnquoteSplicing) => {
            read_abbreviation(tokens, cursor, Datum::unquote_splicing)
        }
        TokenKind::Punctuator(_) => Err(Error::parse_error("Unexpected token", location)),
    }
}

fn read_list(tokens: &[Token], open_cursor: usize) -> frontend::Result<(Datum, usize)> {
    let open = &tokens[open_cursor];
    let mut elements = vec![];
    let mut cursor = open_cursor + 1;

    loop {
        match tokens.get(cursor) {
            None => return Err(end_of_input(tokens)),
            Some(t) if t.is_punctuator(Punctuator::RightParen) => {
                let location = enclose(open, t);
                return Ok((Datum::list(elements, location), cursor + 1));
            }
            Some(t) if t.is_punctuator(Punctuator::Dot) => {
                if elements.is_empty() {
                    return Err(Error::parse_error(
                        "Improper list must start with a datum",
                        t.source_location().clone(),
                    ));
                }
                let (tail, next) = read_datum(tokens, cursor + 1)?;
                return match tokens.get(next) {
                    Some(close) if close.is_punctuator(Punctuator::RightParen) => {
                        let location = enclose(open, close);
                        Ok((Datum::improper_list(elements, tail, location), next + 1))
                    }
                    Some(other) => Err(Error::parse_error(
                        "Expected closing parenthesis",
                        other.source_location().clone(),
                    )),
                    None => Err(end_of_input(tokens)),
                };
            }
            Some(_) => {
                let (datum, next) = read_datum(tokens, cursor)?;
                elements.push(datum);
                cursor = next;
            }
        }
    }
}

fn read_vector(tokens: &[Token], open_cursor: usize) -> frontend::Result<(Datum, usize)> {
    let open = &tokens[open_cursor];
    let mut elements = vec![];
    let mut cursor = open_cursor + 1;

    loop {
        match tokens.get(cursor) {
            None => return Err(end_of_input(tokens)),
            Some(t) if t.is_punctuator(Punctuator::RightParen) => {
                let location = enclose(open, t);
                return Ok((Datum::vector(elements, location), cursor + 1));
            }
            Some(_) => {
                let (datum, next) = read_datum(tokens, cursor)?;
                elements.push(datum);
                cursor = next;
            }
        }
    }
}

fn read_abbreviation<F>(
    tokens: &[Token],
    prefix_cursor: usize,
    wrap: F,
) -> frontend::Result<(Datum, usize)>
where
    F: FnOnce(Datum, Location) -> Datum,
{
    let prefix = &tokens[prefix_cursor];
    let (inner, next) = read_datum(tokens, prefix_cursor + 1)?;
    let location = prefix.source_location().to(inner.source_location());

    Ok((wrap(inner, location), next))
}

fn enclose(open: &Token, close: &Token) -> Location {
    open.source_location().to(close.source_location())
}

/// The end of input is reported at the last token seen.
fn end_of_input(tokens: &[Token]) -> Error {
    let location = tokens
        .last()
        .map(|t| t.source_location().clone())
        .unwrap_or_else(Location::synthetic);

    Error::parse_error("Unexpected end of input", location)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::source::{BufferSource, Position, Registry, SourceId};

    pub fn read_all(inp: &str) -> frontend::Result<Vec<Datum>> {
        let mut registry = Registry::new();
        let source = registry
            .add(&mut BufferSource::new(inp, "datum-parser-test"))
            .unwrap();

        Reader::new().parse(&source)
    }

    pub fn parse_datum(inp: &str) -> Datum {
        read_all(inp).unwrap()[0].clone()
    }

    pub fn assert_parse_as(inp: &str, expected: Datum) {
        assert_eq!(parse_datum(inp), expected)
    }

    pub fn assert_parse_error(inp: &str, message: &str) {
        match read_all(inp) {
            Err(e) => assert_eq!(format!("{}", e), message),
            Ok(datums) => panic!("expected parse error but got {:?}", datums),
        }
    }

    pub fn location(span: std::ops::Range<usize>, line: usize, col: usize) -> Location {
        Location::new(SourceId::synthetic(), span, Position::new(line, col))
    }

    #[test]
    fn test_read_atoms() {
        assert_parse_as("#t", Datum::boolean(true, location(0..2, 0, 0)));
        assert_parse_as("42", Datum::number(42.0, location(0..2, 0, 0)));
        assert_parse_as("#\\a", Datum::character('a', location(0..3, 0, 0)));
        assert_parse_as("\"hi\"", Datum::string("hi", location(0..4, 0, 0)));
        assert_parse_as("hello", Datum::symbol("hello", location(0..5, 0, 0)));
    }

    #[test]
    fn test_read_proper_list() {
        assert_parse_as(
            "(#t    #f)",
            Datum::list(
                vec![
                    Datum::boolean(true, location(1..3, 0, 1)),
                    Datum::boolean(false, location(7..9, 0, 7)),
                ],
                location(0..10, 0, 0),
            ),
        );

        let empty: Vec<Datum> = vec![];
        assert_parse_as("()", Datum::list(empty, location(0..2, 0, 0)));
    }

    #[test]
    fn test_read_improper_list() {
        assert_parse_as(
            "(a . b)",
            Datum::improper_list(
                vec![Datum::symbol("a", location(1..2, 0, 1))],
                Datum::symbol("b", location(5..6, 0, 5)),
                location(0..7, 0, 0),
            ),
        );
    }

    #[test]
    fn test_read_vector() {
        assert_parse_as(
            "#(1 2)",
            Datum::vector(
                vec![
                    Datum::number(1.0, location(2..3, 0, 2)),
                    Datum::number(2.0, location(4..5, 0, 4)),
                ],
                location(0..6, 0, 0),
            ),
        );
    }

    #[test]
    fn test_read_abbreviations() {
        assert_parse_as(
            "'x",
            Datum::quote(Datum::symbol("x", location(1..2, 0, 1)), location(0..2, 0, 0)),
        );
        assert_parse_as(
            ",@x",
            Datum::unquote_splicing(
                Datum::symbol("x", location(2..3, 0, 2)),
                location(0..3, 0, 0),
            ),
        );
    }

    #[test]
    fn test_improper_list_errors() {
        assert_parse_error("(. b)", "Improper list must start with a datum");
        assert_parse_error("(a . b c)", "Expected closing parenthesis");
        assert_parse_error("(a . )", "Unexpected token");
        assert_parse_error("(a . b", "Unexpected end of input");
    }

    #[test]
    fn test_unterminated_input() {
        assert_parse_error("(", "Unexpected end of input");
        assert_parse_error("(a (b)", "Unexpected end of input");
        assert_parse_error("'", "Unexpected end of input");
    }

    #[test]
    fn test_unexpected_token() {
        assert_parse_error(")", "Unexpected token");
        assert_parse_error(". ", "Unexpected token");
        assert_parse_error("#(1 . 2)", "Unexpected token");
    }

    #[test]
    fn test_end_of_input_position_is_previous_token() {
        match read_all("( ") {
            Err(e) => {
                let position = e.position().unwrap();
                assert_eq!((position.line, position.col), (0, 0));
            }
            Ok(_) => panic!("expected error"),
        }
    }
}
