use super::define;
use super::define::DefinitionExpression;
use super::Expression;
use super::Result;
use crate::frontend::error::Error;
use crate::frontend::parser::result::ParseResult;
use crate::frontend::reader::datum::Datum;
use crate::source::Location;

/// The body of a lambda, let or procedure definition.
///
/// ```grammar
/// <body>     -> <definition>* <sequence>
/// <sequence> -> <command>* <expression>
/// <command>  -> <expression>
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct BodyExpression {
    pub definitions: Vec<DefinitionExpression>,
    pub sequence: Vec<Expression>,
}

impl From<&Expression> for BodyExpression {
    fn from(expr: &Expression) -> Self {
        Self {
            definitions: vec![],
            sequence: vec![expr.clone()],
        }
    }
}

impl From<Vec<Expression>> for BodyExpression {
    fn from(exprs: Vec<Expression>) -> Self {
        Self {
            definitions: vec![],
            sequence: exprs,
        }
    }
}

/// Parse the internal definitions followed by the expression sequence.
///
/// The enclosing `)` is not part of the body; callers consume it.
pub fn parse(datums: &[Datum], loc: &Location) -> Result<BodyExpression> {
    let mut definitions = vec![];
    let mut rest = datums;

    while let Some(datum) = rest.first() {
        match define::parse_definition(datum) {
            ParseResult::Applicable(Ok(definition)) => {
                definitions.push(definition);
                rest = &rest[1..];
            }
            ParseResult::Applicable(Err(e)) => return Err(e),
            ParseResult::NonApplicable(_, _) => break,
        }
    }

    let sequence: Result<Vec<Expression>> =
        rest.iter().map(Expression::parse_expression).collect();
    let sequence = sequence?;

    if sequence.is_empty() {
        return Err(Error::parse_error(
            "Expected (<definition>* <expression>+) as body",
            loc.clone(),
        ));
    }

    Ok(BodyExpression {
        definitions,
        sequence,
    })
}
