use crate::frontend;
use crate::frontend::error::reporting::ErrorReporter;
use crate::frontend::writer::prettyprint;
use crate::source::{BufferSource, Registry};
use clap::Args;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

#[derive(Args, Debug)]
#[command(about = "Interactively read lines and print their datums")]
pub struct Opts {}

pub fn execute(_opts: &Opts) -> i32 {
    println!("husk {}", crate::HUSK_VERSION);

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("{}", e);
            return 1;
        }
    };

    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                read_line(&line);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}", e);
                return 1;
            }
        }
    }

    0
}

fn read_line(line: &str) {
    let mut registry = Registry::new();
    let source = match registry.add(&mut BufferSource::new(line, "repl")) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    match frontend::read(&source) {
        Ok(datums) => {
            for datum in &datums {
                println!("{}", prettyprint(datum));
            }
        }
        Err(e) => ErrorReporter::new(&registry).report_error(&e),
    }
}
