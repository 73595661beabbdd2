use super::Expression;
use crate::frontend::parser::result::ParseResult;
use crate::frontend::reader::datum::Datum;
use crate::frontend::syntax;
use crate::source::{HasSourceLocation, Location};

/// An identifier in a variable position.
///
/// Identifiers compare by name; the location is bookkeeping only.
#[derive(Clone, Debug)]
pub struct Identifier {
    name: String,
    location: Location,
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Identifier {
    pub fn new<T: Into<String>>(name: T, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    pub fn synthetic(name: &str) -> Identifier {
        Self::new(name, Location::synthetic())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> String {
        id.name
    }
}

impl HasSourceLocation for Identifier {
    fn source_location(&self) -> &Location {
        &self.location
    }
}

pub fn parse(datum: &Datum) -> ParseResult<Expression> {
    parse_identifier(datum).map(Expression::Identifier)
}

/// A variable is any symbol that is not a reserved keyword.
pub fn parse_identifier(datum: &Datum) -> ParseResult<Identifier> {
    match datum {
        Datum::Symbol(name, location) if !syntax::is_keyword(name) => {
            ParseResult::accept(Identifier::new(name, location.clone()))
        }
        _ => ParseResult::ignore("Expected identifier", datum.source_location().clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::parser::expression::tests::*;

    #[test]
    fn test_identifier_equals_ignores_location() {
        let x = Identifier::new("foo", location(0..3, 0, 0));
        let y = Identifier::new("foo", location(10..13, 1, 4));

        assert_eq!(x, y)
    }

    #[test]
    fn test_parse_identifier() {
        assert_parse_as("foo", Expression::identifier("foo", location(0..3, 0, 0)));
        assert_parse_as(
            "list->vector",
            Expression::identifier("list->vector", location(0..12, 0, 0)),
        );
    }

    #[test]
    fn test_keywords_are_not_variables() {
        assert_parse_error("lambda");
        assert_parse_error("else");
        assert_parse_error("set!");
    }
}
