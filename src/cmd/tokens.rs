use crate::frontend;
use crate::frontend::error::reporting::ErrorReporter;
use crate::frontend::writer::Writer;
use crate::source::{BufferSource, Registry};
use clap::Args;
use std::io::Read;

#[derive(Args, Debug)]
#[command(about = "Tokenize stdin and print one (kind value) line per token")]
pub struct Opts {}

pub fn execute(_opts: &Opts) -> i32 {
    let mut code = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut code) {
        eprintln!("{}", e);
        return 1;
    }

    let mut registry = Registry::new();
    let source = match registry.add(&mut BufferSource::new(code, "stdin")) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}", e);
            return 1;
        }
    };

    match frontend::tokenize(&source) {
        Ok(tokens) => {
            let writer = Writer::new();
            for token in &tokens {
                println!("{}", writer.write_token(token));
            }
            0
        }
        Err(e) => {
            ErrorReporter::new(&registry).report_error(&e);
            1
        }
    }
}
