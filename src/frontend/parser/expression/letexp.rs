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

pub type BindingSpec = (Identifier, Expression);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LetKind {
    Let,
    LetStar,
    LetRec,
}

/// The let family.
///
/// `name` is only ever present for a named `let`.
#[derive(Clone, PartialEq, Debug)]
pub struct LetExpression {
    pub kind: LetKind,
    pub name: Option<Identifier>,
    pub bindings: Vec<BindingSpec>,
    pub body: BodyExpression,
    location: Location,
}

impl HasSourceLocation for LetExpression {
    fn source_location(&self) -> &Location {
        &self.location
    }
}

pub fn build(
    kind: LetKind,
    name: Option<Identifier>,
    bindings: Vec<BindingSpec>,
    body: BodyExpression,
    location: Location,
) -> LetExpression {
    LetExpression {
        kind,
        name,
        bindings,
        body,
        location,
    }
}

/// Parse a let expression
///
/// Ref: r5rs 7.1.3 (derived expression)
///
/// ```grammar
/// <derived expression> ->
///   (let (<binding spec>*) <body>)
///   (let <identifier> (<binding spec>*) <body>)
///   (let* (<binding spec>*) <body>)
///   (letrec (<binding spec>*) <body>)
///
/// <binding spec> -> (<identifier> <expression>)
/// ```
#[inline]
pub fn parse(datum: &Datum) -> ParseResult<Expression> {
    parse_let(datum).map(Expression::Let)
}

pub fn parse_let(datum: &Datum) -> ParseResult<LetExpression> {
    Expression::parse_form(datum, "let", |operands, loc| {
        do_parse_let(LetKind::Let, operands, loc)
    })
    .or(|| {
        Expression::parse_form(datum, "let*", |operands, loc| {
            do_parse_let(LetKind::LetStar, operands, loc)
        })
    })
    .or(|| {
        Expression::parse_form(datum, "letrec", |operands, loc| {
            do_parse_let(LetKind::LetRec, operands, loc)
        })
    })
}

fn do_parse_let(kind: LetKind, operands: &[Datum], loc: &Location) -> Result<LetExpression> {
    match operands {
        [name @ Datum::Symbol(_, _), bindings, body @ ..] if kind == LetKind::Let => {
            let name = identifier::parse_identifier(name).res()?;
            Ok(build(
                kind,
                Some(name),
                parse_binding_specs(bindings)?,
                body::parse(body, loc)?,
                loc.clone(),
            ))
        }
        [bindings, body @ ..] => Ok(build(
            kind,
            None,
            parse_binding_specs(bindings)?,
            body::parse(body, loc)?,
            loc.clone(),
        )),
        _ => Err(Error::parse_error(
            "Expected (let (<binding spec>*) <body>) or (let <name> (<binding spec>*) <body>)",
            loc.clone(),
        )),
    }
}

fn parse_binding_specs(datum: &Datum) -> Result<Vec<BindingSpec>> {
    match datum.list_slice() {
        Some(specs) => specs.iter().map(parse_binding_spec).collect(),
        None => Err(Error::parse_error(
            "Expected list of binding specs",
            datum.source_location().clone(),
        )),
    }
}

fn parse_binding_spec(datum: &Datum) -> Result<BindingSpec> {
    match datum.list_slice() {
        Some([identifier, expr]) => Ok((
            identifier::parse_identifier(identifier).res()?,
            Expression::parse_expression(expr)?,
        )),
        _ => Err(Error::parse_error(
            "Expected (<identifier> <expression>) as binding",
            datum.source_location().clone(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::parser::expression::tests::*;

    fn parse_let_expression(inp: &str) -> LetExpression {
        match parse_single(inp).unwrap() {
            Expression::Let(letexp) => letexp,
            other => panic!("expected let but got {:?}", other),
        }
    }

    #[test]
    fn test_parse_let() {
        let letexp = parse_let_expression("(let ((x 1) (y 2)) (+ x y))");

        assert_eq!(letexp.kind, LetKind::Let);
        assert_eq!(letexp.name, None);
        assert_eq!(
            letexp.bindings.iter().map(|b| b.0.clone()).collect::<Vec<_>>(),
            vec![Identifier::synthetic("x"), Identifier::synthetic("y")]
        );
        assert_eq!(letexp.body.sequence.len(), 1);
    }

    #[test]
    fn test_parse_named_let() {
        let letexp = parse_let_expression("(let loop ((x 1)) (loop x))");

        assert_eq!(letexp.kind, LetKind::Let);
        assert_eq!(letexp.name, Some(Identifier::synthetic("loop")));
        assert_eq!(letexp.bindings.len(), 1);
    }

    #[test]
    fn test_parse_let_star_and_letrec() {
        assert_eq!(
            parse_let_expression("(let* ((x 1)) x)").kind,
            LetKind::LetStar
        );
        assert_eq!(
            parse_let_expression("(letrec ((x 1)) x)").kind,
            LetKind::LetRec
        );
    }

    #[test]
    fn test_parse_let_errors() {
        assert_parse_error("(let)");
        assert_parse_error("(let x (+ x 1))");
        assert_parse_error("(let ((x)) x)");
        assert_parse_error("(let ((x 1 2)) x)");
        assert_parse_error("(let* name ((x 1)) x)");
        assert_parse_error("(let ((x 1)))");
    }
}
