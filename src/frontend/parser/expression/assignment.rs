use super::identifier;
use super::identifier::Identifier;
use super::Expression;
use super::Result;
use crate::frontend::error::Error;
use crate::frontend::parser::result::ParseResult;
use crate::frontend::reader::datum::Datum;
use crate::source::{HasSourceLocation, Location};

#[derive(Clone, PartialEq, Debug)]
pub struct SetExpression {
    pub name: Identifier,
    pub value: Box<Expression>,
    location: Location,
}

impl HasSourceLocation for SetExpression {
    fn source_location(&self) -> &Location {
        &self.location
    }
}

pub fn build(name: Identifier, value: Expression, location: Location) -> SetExpression {
    SetExpression {
        name,
        value: Box::new(value),
        location,
    }
}

/// Parse a set! expression
///
/// Ref: r5rs 7.1.3
///
/// ```grammar
/// <assignment> -> (set! <identifier> <expression>)
/// ```
pub fn parse(datum: &Datum) -> ParseResult<Expression> {
    parse_set(datum).map(Expression::Assign)
}

pub fn parse_set(datum: &Datum) -> ParseResult<SetExpression> {
    Expression::parse_form(datum, "set!", do_parse_set)
}

pub fn do_parse_set(operands: &[Datum], loc: &Location) -> Result<SetExpression> {
    match operands {
        [identifier, expr] => Ok(build(
            identifier::parse_identifier(identifier).res()?,
            Expression::parse_expression(expr)?,
            loc.clone(),
        )),
        _ => Err(Error::parse_error(
            "Expected (set! <identifier> <expression>)",
            loc.clone(),
        )),
    }
}
