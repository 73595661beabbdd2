mod helpers;

use helpers::*;
use husk::frontend::parser::expression::{
    CondClause, DefinitionExpression, Expression, Formals, LetKind, LogicalOperator,
};
use husk::frontend::reader::datum::Datum;
use matches::assert_matches;

fn parse_one(code: &str) -> Expression {
    let mut programs = parse(code).unwrap();
    assert_eq!(programs.len(), 1, "expected exactly one program in {}", code);
    programs.remove(0)
}

#[test]
fn parses_variables_and_literals() {
    assert_matches!(parse_one("x"), Expression::Identifier(_));
    assert_matches!(parse_one("#t"), Expression::Literal(_));
    assert_matches!(parse_one("\"s\""), Expression::Literal(_));
    assert_matches!(parse_one("#\\a"), Expression::Literal(_));
    assert_matches!(parse_one("1"), Expression::Literal(_));
}

#[test]
fn parses_a_definition() {
    match parse_one("(define x 1)") {
        Expression::Define(DefinitionExpression::DefineSimple(name, value, _)) => {
            assert_eq!(name.name(), "x");
            assert_matches!(
                *value,
                Expression::Literal(ref lit) if matches!(lit.datum(), Datum::Number(v, _) if *v == 1.0)
            );
        }
        other => panic!("expected simple definition but got {:?}", other),
    }
}

#[test]
fn parses_the_define_procedure_sugar() {
    match parse_one("(define (add a b) (+ a b))") {
        Expression::Define(DefinitionExpression::DefineProcedure(name, formals, body, _)) => {
            assert_eq!(name.name(), "add");
            assert_matches!(formals, Formals::ArgList(ref ids) if ids.len() == 2);
            assert_eq!(body.sequence.len(), 1);
        }
        other => panic!("expected procedure definition but got {:?}", other),
    }
}

#[test]
fn parses_a_lambda() {
    match parse_one("(lambda (x) x)") {
        Expression::Lambda(lambda) => {
            match &lambda.formals {
                Formals::ArgList(ids) => {
                    assert_eq!(ids.iter().map(|i| i.name()).collect::<Vec<_>>(), vec!["x"])
                }
                other => panic!("expected arg list but got {:?}", other),
            }
            assert!(lambda.body.definitions.is_empty());
            assert_matches!(lambda.body.sequence[..], [Expression::Identifier(_)]);
        }
        other => panic!("expected lambda but got {:?}", other),
    }
}

#[test]
fn parses_conditionals_and_assignments() {
    match parse_one("(if (f x) y z)") {
        Expression::If(ifexp) => {
            assert_matches!(*ifexp.test, Expression::Apply(_));
            assert!(ifexp.alternate.is_some());
        }
        other => panic!("expected if but got {:?}", other),
    }

    match parse_one("(set! x (+ x 1))") {
        Expression::Assign(set) => {
            assert_eq!(set.name.name(), "x");
            assert_matches!(*set.value, Expression::Apply(_));
        }
        other => panic!("expected set! but got {:?}", other),
    }
}

#[test]
fn parses_the_derived_forms() {
    match parse_one("(cond ((= x 1) a) (else b))") {
        Expression::Cond(cond) => {
            assert_matches!(cond.clauses[..], [CondClause::Sequence(_, _)]);
            assert!(cond.else_sequence.is_some());
        }
        other => panic!("expected cond but got {:?}", other),
    }

    match parse_one("(and #t (or x y))") {
        Expression::Logical(and) => {
            assert_eq!(and.operator, LogicalOperator::And);
            assert_matches!(and.operands[1], Expression::Logical(_));
        }
        other => panic!("expected and but got {:?}", other),
    }

    match parse_one("(let loop ((i 0)) (loop (+ i 1)))") {
        Expression::Let(letexp) => {
            assert_eq!(letexp.kind, LetKind::Let);
            assert_eq!(letexp.name.as_ref().map(|n| n.name()), Some("loop"));
        }
        other => panic!("expected let but got {:?}", other),
    }

    assert_matches!(parse_one("(letrec ((f (lambda (x) x))) (f 1))"), Expression::Let(_));
    assert_matches!(parse_one("(begin a b c)"), Expression::Begin(_));
    assert_matches!(
        parse_one("(do ((i 0 (+ i 1))) ((= i 10) i) (f i))"),
        Expression::Do(_)
    );
    assert_matches!(parse_one("(delay (f x))"), Expression::Delay(_));
}

#[test]
fn parses_procedure_calls() {
    match parse_one("(f x 1 \"s\")") {
        Expression::Apply(apply) => {
            assert_matches!(*apply.operator, Expression::Identifier(_));
            assert_eq!(apply.operands.len(), 3);
        }
        other => panic!("expected application but got {:?}", other),
    }

    assert_matches!(parse_one("((compose f g) x)"), Expression::Apply(_));
}

#[test]
fn parses_a_sequence_of_programs() {
    let programs = parse("(define x 1) (set! x 2) (f x)").unwrap();
    assert_eq!(programs.len(), 3);
}

#[test]
fn keywords_never_head_a_procedure_call() {
    assert_error_message(parse("(quote x)"), "Unsupported form: quote");
    assert_error_message(parse("(case x (else 1))"), "Unsupported form: case");
    assert_error_message(parse("(else 1)"), "Unsupported form: else");
    assert!(parse("(lambda)").is_err());
}

#[test]
fn keywords_are_not_variables() {
    assert_error_message(parse("(f else)"), "Expected expression");
    assert!(parse("(set! lambda 1)").is_err());
}

#[test]
fn cond_needs_a_clause_or_an_else() {
    assert_error_message(parse("(cond)"), "No cond clause and not else specified");
}

#[test]
fn empty_source_parses_to_nothing() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse(" ; only atmosphere\n").unwrap().is_empty());
}

#[test]
fn parse_stops_at_the_first_error() {
    assert!(parse("(define x 1) (if) (f x)").is_err());
}
