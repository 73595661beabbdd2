use super::Expression;
use super::Result;
use crate::frontend::error::Error;
use crate::frontend::parser::result::ParseResult;
use crate::frontend::reader::datum::Datum;
use crate::source::{HasSourceLocation, Location};

/// `(delay <expression>)`
#[derive(Clone, PartialEq, Debug)]
pub struct DelayExpression {
    pub expression: Box<Expression>,
    location: Location,
}

impl HasSourceLocation for DelayExpression {
    fn source_location(&self) -> &Location {
        &self.location
    }
}

pub fn build(expression: Expression, location: Location) -> DelayExpression {
    DelayExpression {
        expression: Box::new(expression),
        location,
    }
}

pub fn parse(datum: &Datum) -> ParseResult<Expression> {
    parse_delay(datum).map(Expression::Delay)
}

pub fn parse_delay(datum: &Datum) -> ParseResult<DelayExpression> {
    Expression::parse_form(datum, "delay", do_parse_delay)
}

fn do_parse_delay(operands: &[Datum], loc: &Location) -> Result<DelayExpression> {
    match operands {
        [expression] => Ok(build(Expression::parse_expression(expression)?, loc.clone())),
        _ => Err(Error::parse_error(
            "Expected (delay <expression>)",
            loc.clone(),
        )),
    }
}
