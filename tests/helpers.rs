use husk::frontend;
use husk::frontend::lexer::token::Token;
use husk::frontend::parser::expression::Expression;
use husk::frontend::reader::datum::Datum;
use husk::source::{BufferSource, Registry};

pub fn tokenize(code: &str) -> frontend::Result<Vec<Token>> {
    let mut registry = Registry::new();
    let source = registry
        .add(&mut BufferSource::new(code, "integration-test"))
        .unwrap();

    frontend::tokenize(&source)
}

pub fn read(code: &str) -> frontend::Result<Vec<Datum>> {
    let mut registry = Registry::new();
    let source = registry
        .add(&mut BufferSource::new(code, "integration-test"))
        .unwrap();

    frontend::read(&source)
}

pub fn parse(code: &str) -> frontend::Result<Vec<Expression>> {
    let mut registry = Registry::new();
    let source = registry
        .add(&mut BufferSource::new(code, "integration-test"))
        .unwrap();

    frontend::parse(&source)
}

pub fn assert_error_message(result: frontend::Result<impl std::fmt::Debug>, message: &str) {
    match result {
        Err(e) => assert_eq!(format!("{}", e), message),
        Ok(v) => panic!("expected `{}` but got {:?}", message, v),
    }
}
