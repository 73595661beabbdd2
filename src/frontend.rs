pub mod error;
pub mod lexer;
pub mod parser;
pub mod reader;
pub mod syntax;
pub mod writer;

use crate::source::Source;
use lexer::token::Token;
use lexer::Lexer;
use parser::expression::Expression;
use reader::datum::Datum;
use reader::Reader;

pub type Result<T> = std::result::Result<T, error::Error>;

/// Turn a source into its token stream
pub fn tokenize(source: &Source) -> Result<Vec<Token>> {
    Lexer::new().tokenize(source)
}

/// Read all datums from a source
pub fn read(source: &Source) -> Result<Vec<Datum>> {
    Reader::new().parse(source)
}

/// Read a source as a sequence of programs, each an expression or a definition
pub fn parse(source: &Source) -> Result<Vec<Expression>> {
    parser::parse(&tokenize(source)?)
}
