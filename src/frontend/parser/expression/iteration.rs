use super::identifier;
use super::identifier::Identifier;
use super::Expression;
use super::Result;
use crate::frontend::error::Error;
use crate::frontend::parser::result::ParseResult;
use crate::frontend::reader::datum::Datum;
use crate::source::{HasSourceLocation, Location};

/// One `(<variable> <init> <step>?)` of a do loop.
#[derive(Clone, PartialEq, Debug)]
pub struct IterationSpec {
    pub variable: Identifier,
    pub init: Expression,
    pub step: Option<Expression>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct DoExpression {
    pub specs: Vec<IterationSpec>,
    pub test: Box<Expression>,
    pub result: Vec<Expression>,
    pub commands: Vec<Expression>,
    location: Location,
}

impl HasSourceLocation for DoExpression {
    fn source_location(&self) -> &Location {
        &self.location
    }
}

/// Parse a do expression
///
/// Ref: r5rs 7.1.3 (derived expression)
///
/// ```grammar
/// <derived expression> ->
///   (do (<iteration spec>*) (<test> <sequence>) <command>*)
///
/// <iteration spec> -> (<identifier> <init> <step>) | (<identifier> <init>)
/// ```
pub fn parse(datum: &Datum) -> ParseResult<Expression> {
    parse_do(datum).map(Expression::Do)
}

pub fn parse_do(datum: &Datum) -> ParseResult<DoExpression> {
    Expression::parse_form(datum, "do", do_parse_do)
}

fn do_parse_do(operands: &[Datum], loc: &Location) -> Result<DoExpression> {
    match operands {
        [specs, test_clause, commands @ ..] => {
            let specs = parse_iteration_specs(specs)?;
            let (test, result) = parse_test_clause(test_clause)?;
            let commands: Result<Vec<Expression>> =
                commands.iter().map(Expression::parse_expression).collect();

            Ok(DoExpression {
                specs,
                test: Box::new(test),
                result,
                commands: commands?,
                location: loc.clone(),
            })
        }
        _ => Err(Error::parse_error(
            "Expected (do (<iteration spec>*) (<test> <sequence>) <command>*)",
            loc.clone(),
        )),
    }
}

fn parse_iteration_specs(datum: &Datum) -> Result<Vec<IterationSpec>> {
    match datum.list_slice() {
        Some(specs) => specs.iter().map(parse_iteration_spec).collect(),
        None => Err(Error::parse_error(
            "Expected list of iteration specs",
            datum.source_location().clone(),
        )),
    }
}

fn parse_iteration_spec(datum: &Datum) -> Result<IterationSpec> {
    let build = |variable: &Datum, init: &Datum, step: Option<&Datum>| {
        Ok(IterationSpec {
            variable: identifier::parse_identifier(variable).res()?,
            init: Expression::parse_expression(init)?,
            step: step.map(Expression::parse_expression).transpose()?,
        })
    };

    match datum.list_slice() {
        Some([variable, init]) => build(variable, init, None),
        Some([variable, init, step]) => build(variable, init, Some(step)),
        _ => Err(Error::parse_error(
            "Expected (<identifier> <init> <step>?) as iteration spec",
            datum.source_location().clone(),
        )),
    }
}

fn parse_test_clause(datum: &Datum) -> Result<(Expression, Vec<Expression>)> {
    match datum.list_slice() {
        Some([test, sequence @ ..]) => {
            let test = Expression::parse_expression(test)?;
            let sequence: Result<Vec<Expression>> =
                sequence.iter().map(Expression::parse_expression).collect();
            Ok((test, sequence?))
        }
        _ => Err(Error::parse_error(
            "Expected (<test> <sequence>) as do termination clause",
            datum.source_location().clone(),
        )),
    }
}
