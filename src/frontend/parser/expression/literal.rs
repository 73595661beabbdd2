use super::Expression;
use crate::frontend::parser::result::ParseResult;
use crate::frontend::reader::datum::Datum;
use crate::source::{HasSourceLocation, Location};

/// A self evaluating literal: boolean, number, string or character.
#[repr(transparent)]
#[derive(Clone, PartialEq, Debug)]
pub struct LiteralExpression(Datum);

impl LiteralExpression {
    pub fn datum(&self) -> &Datum {
        &self.0
    }
}

pub fn build(datum: Datum) -> LiteralExpression {
    LiteralExpression(datum)
}

#[inline]
pub fn parse(datum: &Datum) -> ParseResult<Expression> {
    parse_literal(datum).map(Expression::Literal)
}

pub fn parse_literal(datum: &Datum) -> ParseResult<LiteralExpression> {
    match datum {
        Datum::Boolean(_, _)
        | Datum::Char(_, _)
        | Datum::String(_, _)
        | Datum::Number(_, _) => ParseResult::accept(build(datum.clone())),
        _ => ParseResult::ignore("Expected literal", datum.source_location().clone()),
    }
}

impl HasSourceLocation for LiteralExpression {
    fn source_location(&self) -> &Location {
        self.0.source_location()
    }
}
