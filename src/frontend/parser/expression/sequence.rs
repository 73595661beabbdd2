use super::Expression;
use super::Result;
use crate::frontend::error::Error;
use crate::frontend::parser::result::ParseResult;
use crate::frontend::reader::datum::Datum;
use crate::source::{HasSourceLocation, Location};

/// An expression level `(begin <sequence>)`.
///
/// A `begin` that holds only definitions is a definition and handled by
/// the definition parser before this one runs.
#[derive(Clone, PartialEq, Debug)]
pub struct BeginExpression {
    pub first: Box<Expression>,
    pub rest: Vec<Expression>,
    location: Location,
}

impl HasSourceLocation for BeginExpression {
    fn source_location(&self) -> &Location {
        &self.location
    }
}

pub fn build(first: Expression, rest: Vec<Expression>, location: Location) -> BeginExpression {
    BeginExpression {
        first: Box::new(first),
        rest,
        location,
    }
}

pub fn parse(datum: &Datum) -> ParseResult<Expression> {
    parse_begin(datum).map(Expression::Begin)
}

pub fn parse_begin(datum: &Datum) -> ParseResult<BeginExpression> {
    Expression::parse_form(datum, "begin", do_parse_begin)
}

pub fn do_parse_begin(operands: &[Datum], loc: &Location) -> Result<BeginExpression> {
    match operands {
        [first, rest @ ..] => {
            let first = Expression::parse_expression(first)?;
            let rest: Result<Vec<Expression>> =
                rest.iter().map(Expression::parse_expression).collect();

            Ok(build(first, rest?, loc.clone()))
        }
        _ => Err(Error::parse_error(
            "Expected (begin <expression>+)",
            loc.clone(),
        )),
    }
}
