use super::Expression;
use super::Result;
use crate::frontend::error::Error;
use crate::frontend::parser::result::ParseResult;
use crate::frontend::reader::datum::Datum;
use crate::source::{HasSourceLocation, Location};

/// A single cond clause.
///
/// ```grammar
/// <cond clause> -> (<test>) | (<test> => <recipient>) | (<test> <sequence>)
/// ```
#[derive(Clone, PartialEq, Debug)]
pub enum CondClause {
    Test(Expression),
    Arrow(Expression, Expression),
    Sequence(Expression, Vec<Expression>),
}

#[derive(Clone, PartialEq, Debug)]
pub struct CondExpression {
    pub clauses: Vec<CondClause>,
    pub else_sequence: Option<Vec<Expression>>,
    location: Location,
}

impl HasSourceLocation for CondExpression {
    fn source_location(&self) -> &Location {
        &self.location
    }
}

pub fn build(
    clauses: Vec<CondClause>,
    else_sequence: Option<Vec<Expression>>,
    location: Location,
) -> CondExpression {
    CondExpression {
        clauses,
        else_sequence,
        location,
    }
}

/// Parse a cond expression
///
/// Ref: r5rs 7.1.3 (derived expression)
///
/// ```grammar
/// <derived expression> -> (cond <cond clause>+)
///                       | (cond <cond clause>* (else <sequence>))
/// ```
pub fn parse(datum: &Datum) -> ParseResult<Expression> {
    parse_cond(datum).map(Expression::Cond)
}

pub fn parse_cond(datum: &Datum) -> ParseResult<CondExpression> {
    Expression::parse_form(datum, "cond", do_parse_cond)
}

pub fn do_parse_cond(operands: &[Datum], loc: &Location) -> Result<CondExpression> {
    let mut clauses = vec![];
    let mut else_sequence = None;

    for (i, clause) in operands.iter().enumerate() {
        let elements = clause.list_slice().ok_or_else(|| {
            Error::parse_error("Expected cond clause", clause.source_location().clone())
        })?;

        match elements {
            [head, sequence @ ..] if head.symbol_name() == Some("else") => {
                if i != operands.len() - 1 {
                    return Err(Error::parse_error(
                        "Expected else clause to be the last clause",
                        clause.source_location().clone(),
                    ));
                }
                if sequence.is_empty() {
                    return Err(Error::parse_error(
                        "Expected (else <sequence>)",
                        clause.source_location().clone(),
                    ));
                }
                let sequence: Result<Vec<Expression>> =
                    sequence.iter().map(Expression::parse_expression).collect();
                else_sequence = Some(sequence?);
            }
            _ => clauses.push(parse_clause(elements, clause.source_location())?),
        }
    }

    if clauses.is_empty() && else_sequence.is_none() {
        return Err(Error::parse_error(
            "No cond clause and not else specified",
            loc.clone(),
        ));
    }

    Ok(build(clauses, else_sequence, loc.clone()))
}

fn parse_clause(elements: &[Datum], loc: &Location) -> Result<CondClause> {
    match elements {
        [test] => Ok(CondClause::Test(Expression::parse_expression(test)?)),
        [test, arrow, recipient] if arrow.symbol_name() == Some("=>") => Ok(CondClause::Arrow(
            Expression::parse_expression(test)?,
            Expression::parse_expression(recipient)?,
        )),
        [test, sequence @ ..] if !sequence.is_empty() => {
            let sequence: Result<Vec<Expression>> =
                sequence.iter().map(Expression::parse_expression).collect();
            Ok(CondClause::Sequence(
                Expression::parse_expression(test)?,
                sequence?,
            ))
        }
        _ => Err(Error::parse_error("Expected cond clause", loc.clone())),
    }
}
