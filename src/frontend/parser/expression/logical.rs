use super::Expression;
use super::Result;
use crate::frontend::parser::result::ParseResult;
use crate::frontend::reader::datum::Datum;
use crate::source::{HasSourceLocation, Location};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogicalOperator {
    And,
    Or,
}

/// `(and <test>*)` and `(or <test>*)`; both accept an empty operand list.
#[derive(Clone, PartialEq, Debug)]
pub struct LogicalExpression {
    pub operator: LogicalOperator,
    pub operands: Vec<Expression>,
    location: Location,
}

impl HasSourceLocation for LogicalExpression {
    fn source_location(&self) -> &Location {
        &self.location
    }
}

pub fn build(
    operator: LogicalOperator,
    operands: Vec<Expression>,
    location: Location,
) -> LogicalExpression {
    LogicalExpression {
        operator,
        operands,
        location,
    }
}

pub fn parse(datum: &Datum) -> ParseResult<Expression> {
    parse_logical(datum).map(Expression::Logical)
}

pub fn parse_logical(datum: &Datum) -> ParseResult<LogicalExpression> {
    Expression::parse_form(datum, "and", |operands, loc| {
        do_parse_logical(LogicalOperator::And, operands, loc)
    })
    .or(|| {
        Expression::parse_form(datum, "or", |operands, loc| {
            do_parse_logical(LogicalOperator::Or, operands, loc)
        })
    })
}

fn do_parse_logical(
    operator: LogicalOperator,
    operands: &[Datum],
    loc: &Location,
) -> Result<LogicalExpression> {
    let operands: Result<Vec<Expression>> =
        operands.iter().map(Expression::parse_expression).collect();

    Ok(build(operator, operands?, loc.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::parser::expression::tests::*;

    fn parse_logical_expression(inp: &str) -> LogicalExpression {
        match parse_single(inp).unwrap() {
            Expression::Logical(logical) => logical,
            other => panic!("expected and/or but got {:?}", other),
        }
    }

    #[test]
    fn test_parse_and() {
        let and = parse_logical_expression("(and #t #f)");
        assert_eq!(and.operator, LogicalOperator::And);
        assert_eq!(and.operands.len(), 2);

        let empty = parse_logical_expression("(and)");
        assert!(empty.operands.is_empty());
    }

    #[test]
    fn test_parse_or() {
        let or = parse_logical_expression("(or x y z)");
        assert_eq!(or.operator, LogicalOperator::Or);
        assert_eq!(or.operands.len(), 3);
    }

    #[test]
    fn test_malformed_operand_is_fatal() {
        assert_parse_error("(and #t ())");
    }
}
