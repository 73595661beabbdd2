use super::body;
use super::body::BodyExpression;
use super::identifier;
use super::identifier::Identifier;
use super::lambda::Formals;
use super::Expression;
use super::Result;
use crate::frontend::error::Error;
use crate::frontend::parser::result::ParseResult;
use crate::frontend::reader::datum::Datum;
use crate::source::{HasSourceLocation, Location};

/// Definitions, including the procedure sugar.
///
/// Ref: r5rs 7.1.6
///
/// ```grammar
/// <definition> ->
///   (define <identifier> <expression>)        |
///   (define (<identifier> <def formals>) <body>) |
///   (begin <definition>*)
/// ```
#[derive(Clone, PartialEq, Debug)]
pub enum DefinitionExpression {
    DefineSimple(Identifier, Box<Expression>, Location),
    DefineProcedure(Identifier, Formals, BodyExpression, Location),
    Begin(Vec<DefinitionExpression>, Location),
}

impl HasSourceLocation for DefinitionExpression {
    fn source_location(&self) -> &Location {
        match self {
            DefinitionExpression::DefineSimple(_, _, loc) => loc,
            DefinitionExpression::DefineProcedure(_, _, _, loc) => loc,
            DefinitionExpression::Begin(_, loc) => loc,
        }
    }
}

pub fn build_simple(id: Identifier, expr: Expression, loc: Location) -> DefinitionExpression {
    DefinitionExpression::DefineSimple(id, Box::new(expr), loc)
}

pub fn parse(datum: &Datum) -> ParseResult<Expression> {
    parse_definition(datum).map(Expression::Define)
}

pub fn parse_definition(datum: &Datum) -> ParseResult<DefinitionExpression> {
    match datum.list_slice() {
        Some([head, operands @ ..]) if head.symbol_name() == Some("define") => {
            do_parse_define(operands, datum.source_location()).into()
        }
        Some([head, operands @ ..]) if head.symbol_name() == Some("begin") => {
            parse_begin_definition(operands, datum.source_location())
        }
        _ => ParseResult::ignore("Expected definition", datum.source_location().clone()),
    }
}

fn do_parse_define(operands: &[Datum], loc: &Location) -> Result<DefinitionExpression> {
    match operands {
        [name @ Datum::Symbol(_, _), expr] => Ok(build_simple(
            identifier::parse_identifier(name).res()?,
            Expression::parse_expression(expr)?,
            loc.clone(),
        )),
        [head, body @ ..] if !head.is_atom() && !body.is_empty() => {
            let (name, formals) = parse_procedure_head(head)?;
            Ok(DefinitionExpression::DefineProcedure(
                name,
                formals,
                body::parse(body, loc)?,
                loc.clone(),
            ))
        }
        _ => Err(Error::parse_error(
            "Expected (define <identifier> <expression>) or (define (<identifier> <formals>) <body>)",
            loc.clone(),
        )),
    }
}

/// `(<name> <formals…>)` or `(<name> <formals…> . <rest>)`
fn parse_procedure_head(datum: &Datum) -> Result<(Identifier, Formals)> {
    if let Some([name, formals @ ..]) = datum.list_slice() {
        let name = identifier::parse_identifier(name).res()?;
        let formals: Result<Vec<Identifier>> = formals
            .iter()
            .map(|d| identifier::parse_identifier(d).res())
            .collect();

        Ok((name, Formals::ArgList(formals?)))
    } else if let Some(([name, formals @ ..], tail)) = datum.improper_list_slice() {
        let name = identifier::parse_identifier(name).res()?;
        let formals: Result<Vec<Identifier>> = formals
            .iter()
            .map(|d| identifier::parse_identifier(d).res())
            .collect();
        let formals = formals?;
        let rest = identifier::parse_identifier(tail).res()?;

        if formals.is_empty() {
            Ok((name, Formals::RestArg(rest)))
        } else {
            Ok((name, Formals::VarArg(formals, rest)))
        }
    } else {
        Err(Error::parse_error(
            "Expected (<identifier> <formals>)",
            datum.source_location().clone(),
        ))
    }
}

/// A begin is a definition only when every element is one; a begin with
/// expressions in it falls through to the expression parser.
fn parse_begin_definition(
    operands: &[Datum],
    loc: &Location,
) -> ParseResult<DefinitionExpression> {
    let mut definitions = vec![];

    for operand in operands {
        match parse_definition(operand) {
            ParseResult::Applicable(Ok(definition)) => definitions.push(definition),
            ParseResult::Applicable(Err(e)) => return ParseResult::error(e),
            ParseResult::NonApplicable(_, _) => {
                return ParseResult::ignore("Expected definition", loc.clone())
            }
        }
    }

    ParseResult::accept(DefinitionExpression::Begin(definitions, loc.clone()))
}
