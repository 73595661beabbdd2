pub mod apply;
pub mod assignment;
pub mod body;
pub mod cond;
pub mod conditional;
pub mod define;
pub mod delay;
pub mod identifier;
pub mod iteration;
pub mod lambda;
pub mod letexp;
pub mod literal;
pub mod logical;
pub mod sequence;
pub mod unsupported;

use super::result::ParseResult;
use crate::frontend::error::Error;
use crate::frontend::reader::datum::Datum;
use crate::source::{HasSourceLocation, Location};

pub use apply::ApplicationExpression;
pub use assignment::SetExpression;
pub use body::BodyExpression;
pub use cond::{CondClause, CondExpression};
pub use conditional::IfExpression;
pub use define::DefinitionExpression;
pub use delay::DelayExpression;
pub use identifier::Identifier;
pub use iteration::{DoExpression, IterationSpec};
pub use lambda::{Formals, LambdaExpression};
pub use letexp::{BindingSpec, LetExpression, LetKind};
pub use literal::LiteralExpression;
pub use logical::{LogicalExpression, LogicalOperator};
pub use sequence::BeginExpression;

pub type Result<T> = std::result::Result<T, Error>;

/// The syntactic categories of the language.
///
/// Ref: r5rs 7.1.3
/// ```grammar
/// <expression> =>
///   <variable>           |
///   <literal>            |
///   <procedure call>     |
///   <lambda expression>  |
///   <conditional>        |
///   <assignment>         |
///   <derived expression>
/// ```
#[derive(Clone, PartialEq, Debug)]
pub enum Expression {
    Identifier(Identifier),
    Literal(LiteralExpression),
    Define(DefinitionExpression),
    Lambda(LambdaExpression),
    Assign(SetExpression),
    If(IfExpression),
    Cond(CondExpression),
    Logical(LogicalExpression),
    Let(LetExpression),
    Begin(BeginExpression),
    Do(DoExpression),
    Delay(DelayExpression),
    Apply(ApplicationExpression),
}

impl Expression {
    /// Parse a top level program element, either a definition or an
    /// expression.
    pub fn parse_program(datum: &Datum) -> Result<Expression> {
        log::trace!("parsing program: {}", datum);
        define::parse(datum)
            .or(|| Self::alternatives(datum))
            .res()
    }

    /// Parse an expression; definitions are not allowed here.
    pub fn parse_expression(datum: &Datum) -> Result<Expression> {
        Self::alternatives(datum).res()
    }

    /// The ordered expression alternatives.
    ///
    /// Keyword forms are checked before the procedure call, so reserved
    /// keywords never parse as operators, and recognized but unsupported
    /// keyword forms are rejected before the call rule could see them.
    fn alternatives(datum: &Datum) -> ParseResult<Expression> {
        identifier::parse(datum)
            .or(|| literal::parse(datum))
            .or(|| lambda::parse(datum))
            .or(|| conditional::parse(datum))
            .or(|| assignment::parse(datum))
            .or(|| cond::parse(datum))
            .or(|| logical::parse(datum))
            .or(|| letexp::parse(datum))
            .or(|| sequence::parse(datum))
            .or(|| iteration::parse(datum))
            .or(|| delay::parse(datum))
            .or(|| unsupported::parse(datum))
            .or(|| apply::parse(datum))
    }

    /// Guard helper for keyword forms.
    ///
    /// Applicable iff `datum` is a list whose head is the symbol
    /// `operator`; `do_parse` then sees the operands and the form's
    /// location and its result is a hard one.
    pub(crate) fn parse_form<T, F>(datum: &Datum, operator: &str, do_parse: F) -> ParseResult<T>
    where
        F: FnOnce(&[Datum], &Location) -> Result<T>,
    {
        match datum.list_slice() {
            Some([head, operands @ ..]) if head.symbol_name() == Some(operator) => {
                do_parse(operands, datum.source_location()).into()
            }
            _ => ParseResult::ignore("Expected expression", datum.source_location().clone()),
        }
    }

    pub fn to_body_expression(&self) -> BodyExpression {
        BodyExpression::from(self)
    }

    // constructors, mostly for tests

    pub fn identifier<S: Into<String>>(name: S, location: Location) -> Expression {
        Expression::Identifier(Identifier::new(name, location))
    }

    pub fn constant(datum: Datum) -> Expression {
        Expression::Literal(literal::build(datum))
    }

    pub fn lambda(formals: Formals, body: BodyExpression, location: Location) -> Expression {
        Expression::Lambda(lambda::build(formals, body, location))
    }

    pub fn assign(name: Identifier, value: Expression, location: Location) -> Expression {
        Expression::Assign(assignment::build(name, value, location))
    }

    pub fn conditional(
        test: Expression,
        consequent: Expression,
        alternate: Option<Expression>,
        location: Location,
    ) -> Expression {
        Expression::If(conditional::build(test, consequent, alternate, location))
    }

    pub fn apply(operator: Expression, operands: Vec<Expression>, location: Location) -> Expression {
        Expression::Apply(apply::build(operator, operands, location))
    }

    pub fn begin(first: Expression, rest: Vec<Expression>, location: Location) -> Expression {
        Expression::Begin(sequence::build(first, rest, location))
    }

    pub fn define(name: Identifier, value: Expression, location: Location) -> Expression {
        Expression::Define(define::build_simple(name, value, location))
    }

    pub fn delay(expression: Expression, location: Location) -> Expression {
        Expression::Delay(delay::build(expression, location))
    }
}

impl HasSourceLocation for Expression {
    fn source_location(&self) -> &Location {
        match self {
            Expression::Identifier(e) => e.source_location(),
            Expression::Literal(e) => e.source_location(),
            Expression::Define(e) => e.source_location(),
            Expression::Lambda(e) => e.source_location(),
            Expression::Assign(e) => e.source_location(),
            Expression::If(e) => e.source_location(),
            Expression::Cond(e) => e.source_location(),
            Expression::Logical(e) => e.source_location(),
            Expression::Let(e) => e.source_location(),
            Expression::Begin(e) => e.source_location(),
            Expression::Do(e) => e.source_location(),
            Expression::Delay(e) => e.source_location(),
            Expression::Apply(e) => e.source_location(),
        }
    }
}
