use super::{Expression, Result};
use crate::frontend::parser::result::ParseResult;
use crate::frontend::reader::datum::Datum;
use crate::frontend::syntax;
use crate::source::{HasSourceLocation, Location};

/// A procedure call `(<operator> <operand>*)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicationExpression {
    pub operator: Box<Expression>,
    pub operands: Vec<Expression>,
    location: Location,
}

impl HasSourceLocation for ApplicationExpression {
    fn source_location(&self) -> &Location {
        &self.location
    }
}

#[inline]
pub fn build(
    operator: Expression,
    operands: Vec<Expression>,
    location: Location,
) -> ApplicationExpression {
    ApplicationExpression {
        operator: Box::new(operator),
        operands,
        location,
    }
}

/// The call rule only applies when the operator position is not a reserved
/// keyword; keywords are reserved even where a runtime binding would
/// shadow them.
pub fn parse(datum: &Datum) -> ParseResult<Expression> {
    match datum.list_slice() {
        Some([operator, operands @ ..]) if !is_keyword_head(operator) => {
            do_parse_apply(operator, operands, datum.source_location())
                .map(Expression::Apply)
                .into()
        }
        _ => ParseResult::ignore("Expected expression", datum.source_location().clone()),
    }
}

fn is_keyword_head(datum: &Datum) -> bool {
    matches!(datum.symbol_name(), Some(name) if syntax::is_keyword(name))
}

fn do_parse_apply(
    operator: &Datum,
    operands: &[Datum],
    loc: &Location,
) -> Result<ApplicationExpression> {
    let operator = Expression::parse_expression(operator)?;
    let operands: Result<Vec<Expression>> =
        operands.iter().map(Expression::parse_expression).collect();

    Ok(build(operator, operands?, loc.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::parser::expression::tests::*;

    #[test]
    fn test_parse_apply() {
        assert_parse_as(
            "(foo #t)",
            Expression::apply(
                Expression::identifier("foo", location(1..4, 0, 1)),
                vec![Expression::constant(Datum::boolean(
                    true,
                    location(5..7, 0, 5),
                ))],
                location(0..8, 0, 0),
            ),
        )
    }

    #[test]
    fn test_parse_apply_operator_expression() {
        assert!(matches!(
            parse_single("((f x) y)").unwrap(),
            Expression::Apply(_)
        ));
    }

    #[test]
    fn test_apply_rejects_malformed_operands() {
        assert_parse_error("(foo ())");
        assert_parse_error("(foo 'bar)");
    }
}
