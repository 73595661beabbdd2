use super::Expression;
use crate::frontend::error::Error;
use crate::frontend::parser::result::ParseResult;
use crate::frontend::reader::datum::Datum;
use crate::frontend::syntax;
use crate::source::{HasSourceLocation, Location};

/// Forms the grammar recognizes but the parser rejects.
///
/// This covers `case`, quotation and quasiquotation (in list form and as
/// reader abbreviations) and any other reserved keyword without an
/// implemented form, such as a stray `else`. The rejection is a hard
/// error so these never fall through to the procedure call rule.
pub fn parse(datum: &Datum) -> ParseResult<Expression> {
    match datum {
        Datum::Quote(_, loc) => unsupported("quote", loc),
        Datum::Quasiquote(_, loc) => unsupported("quasiquote", loc),
        Datum::Unquote(_, loc) => unsupported("unquote", loc),
        Datum::UnquoteSplicing(_, loc) => unsupported("unquote-splicing", loc),
        _ => match datum.list_slice() {
            Some([head, ..]) => match head.symbol_name() {
                Some(name) if syntax::is_keyword(name) => {
                    unsupported(name, datum.source_location())
                }
                _ => not_mine(datum),
            },
            _ => not_mine(datum),
        },
    }
}

fn unsupported<T>(name: &str, location: &Location) -> ParseResult<T> {
    ParseResult::error(Error::parse_error(
        format!("Unsupported form: {}", name),
        location.clone(),
    ))
}

fn not_mine(datum: &Datum) -> ParseResult<Expression> {
    ParseResult::ignore("Expected expression", datum.source_location().clone())
}

#[cfg(test)]
mod tests {
    use crate::frontend::parser::expression::tests::*;

    #[test]
    fn test_case_is_rejected() {
        assert_parse_error_as("(case x ((1) a) (else b))", "Unsupported form: case");
    }

    #[test]
    fn test_quotations_are_rejected() {
        assert_parse_error_as("'x", "Unsupported form: quote");
        assert_parse_error_as("(quote x)", "Unsupported form: quote");
        assert_parse_error_as("`x", "Unsupported form: quasiquote");
        assert_parse_error_as("(quasiquote x)", "Unsupported form: quasiquote");
        assert_parse_error_as(",x", "Unsupported form: unquote");
    }

    #[test]
    fn test_stray_keywords_are_rejected() {
        assert_parse_error_as("(else 1)", "Unsupported form: else");
        assert_parse_error_as("(=> f)", "Unsupported form: =>");
    }
}
