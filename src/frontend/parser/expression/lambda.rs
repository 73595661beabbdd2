use super::body;
use super::body::BodyExpression;
use super::identifier;
use super::identifier::Identifier;
use super::Expression;
use super::Result;
use crate::frontend::error::Error;
use crate::frontend::parser::result::ParseResult;
use crate::frontend::reader::datum::Datum;
use crate::source::{HasSourceLocation, Location};

#[derive(Clone, PartialEq, Debug)]
pub struct LambdaExpression {
    pub formals: Formals,
    pub body: BodyExpression,
    location: Location,
}

impl HasSourceLocation for LambdaExpression {
    fn source_location(&self) -> &Location {
        &self.location
    }
}

/// The formal parameter list of a lambda.
///
/// ```grammar
/// <formals> -> (<identifier>*) | <identifier> | (<identifier>+ . <identifier>)
/// ```
#[derive(Clone, PartialEq, Debug)]
pub enum Formals {
    ArgList(Vec<Identifier>),
    RestArg(Identifier),
    VarArg(Vec<Identifier>, Identifier),
}

impl Formals {
    pub fn empty() -> Formals {
        Formals::ArgList(vec![])
    }
}

pub fn build(formals: Formals, body: BodyExpression, location: Location) -> LambdaExpression {
    LambdaExpression {
        formals,
        body,
        location,
    }
}

#[inline]
pub fn parse(datum: &Datum) -> ParseResult<Expression> {
    parse_lambda(datum).map(Expression::Lambda)
}

pub fn parse_lambda(datum: &Datum) -> ParseResult<LambdaExpression> {
    Expression::parse_form(datum, "lambda", do_parse_lambda)
}

pub fn do_parse_lambda(operands: &[Datum], loc: &Location) -> Result<LambdaExpression> {
    match operands {
        [formals, body @ ..] => Ok(build(
            parse_formals(formals)?,
            body::parse(body, loc)?,
            loc.clone(),
        )),
        _ => Err(Error::parse_error(
            "Expected (lambda <formals> <body>)",
            loc.clone(),
        )),
    }
}

pub fn parse_formals(datum: &Datum) -> Result<Formals> {
    if let Some(elements) = datum.list_slice() {
        let identifiers: Result<Vec<Identifier>> = elements
            .iter()
            .map(|d| identifier::parse_identifier(d).res())
            .collect();
        Ok(Formals::ArgList(identifiers?))
    } else if let Some((head, tail)) = datum.improper_list_slice() {
        let identifiers: Result<Vec<Identifier>> = head
            .iter()
            .map(|d| identifier::parse_identifier(d).res())
            .collect();
        let rest = identifier::parse_identifier(tail).res()?;
        Ok(Formals::VarArg(identifiers?, rest))
    } else {
        Ok(Formals::RestArg(identifier::parse_identifier(datum).res()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::parser::expression::tests::*;

    #[test]
    fn test_parse_lambda() {
        assert_parse_as(
            "(lambda all #t)",
            Expression::lambda(
                Formals::RestArg(Identifier::synthetic("all")),
                Expression::constant(Datum::boolean(true, location(12..14, 0, 12)))
                    .to_body_expression(),
                location(0..15, 0, 0),
            ),
        );

        assert_parse_as(
            "(lambda (x y) #t)",
            Expression::lambda(
                Formals::ArgList(vec![Identifier::synthetic("x"), Identifier::synthetic("y")]),
                Expression::constant(Datum::boolean(true, location(14..16, 0, 14)))
                    .to_body_expression(),
                location(0..17, 0, 0),
            ),
        );

        assert_parse_as(
            "(lambda () #t)",
            Expression::lambda(
                Formals::empty(),
                Expression::constant(Datum::boolean(true, location(11..13, 0, 11)))
                    .to_body_expression(),
                location(0..14, 0, 0),
            ),
        );

        assert_parse_as(
            "(lambda (x y . z) #t)",
            Expression::lambda(
                Formals::VarArg(
                    vec![Identifier::synthetic("x"), Identifier::synthetic("y")],
                    Identifier::synthetic("z"),
                ),
                Expression::constant(Datum::boolean(true, location(18..20, 0, 18)))
                    .to_body_expression(),
                location(0..21, 0, 0),
            ),
        );
    }

    #[test]
    fn test_parse_lambda_errors() {
        assert_parse_error("(lambda)");
        assert_parse_error("(lambda #t #t)");
        assert_parse_error("(lambda (x))");
        assert_parse_error("(lambda (if) x)");
    }
}
