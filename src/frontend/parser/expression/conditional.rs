use super::Expression;
use super::Result;
use crate::frontend::error::Error;
use crate::frontend::parser::result::ParseResult;
use crate::frontend::reader::datum::Datum;
use crate::source::{HasSourceLocation, Location};

#[derive(Clone, PartialEq, Debug)]
pub struct IfExpression {
    pub test: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Option<Box<Expression>>,
    location: Location,
}

impl HasSourceLocation for IfExpression {
    fn source_location(&self) -> &Location {
        &self.location
    }
}

pub fn build(
    test: Expression,
    consequent: Expression,
    alternate: Option<Expression>,
    location: Location,
) -> IfExpression {
    IfExpression {
        test: Box::new(test),
        consequent: Box::new(consequent),
        alternate: alternate.map(Box::new),
        location,
    }
}

/// Parse an if expression
///
/// Ref: r5rs 7.1.3
///
/// ```grammar
/// <conditional> -> (if <test> <consequent> <alternate>)
/// <test>        -> <expression>
/// <consequent>  -> <expression>
/// <alternate>   -> <expression> | <empty>
/// ```
#[inline]
pub fn parse(datum: &Datum) -> ParseResult<Expression> {
    parse_if(datum).map(Expression::If)
}

pub fn parse_if(datum: &Datum) -> ParseResult<IfExpression> {
    Expression::parse_form(datum, "if", do_parse_if)
}

pub fn do_parse_if(operands: &[Datum], loc: &Location) -> Result<IfExpression> {
    match operands {
        [test, consequent] => Ok(build(
            Expression::parse_expression(test)?,
            Expression::parse_expression(consequent)?,
            None,
            loc.clone(),
        )),
        [test, consequent, alternate] => Ok(build(
            Expression::parse_expression(test)?,
            Expression::parse_expression(consequent)?,
            Some(Expression::parse_expression(alternate)?),
            loc.clone(),
        )),
        _ => Err(Error::parse_error(
            "Expected (if <test> <consequent> <alternate>?)",
            loc.clone(),
        )),
    }
}
