use crate::frontend;
use crate::frontend::error::reporting::ErrorReporter;
use crate::frontend::writer::prettyprint;
use crate::source::{BufferSource, FileSource, Registry, Source};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(about = "Read a source and print one pretty printed datum per line")]
pub struct Opts {
    /// Read from this file instead of stdin
    pub input: Option<PathBuf>,
}

pub fn execute(opts: &Opts) -> i32 {
    let mut registry = Registry::new();
    let source = match add_source(&mut registry, opts) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}", e);
            return 1;
        }
    };

    match frontend::read(&source) {
        Ok(datums) => {
            for datum in &datums {
                println!("{}", prettyprint(datum));
            }
            0
        }
        Err(e) => {
            ErrorReporter::new(&registry).report_error(&e);
            1
        }
    }
}

fn add_source(registry: &mut Registry, opts: &Opts) -> std::io::Result<Source> {
    match &opts.input {
        Some(path) => registry.add(&mut FileSource::open(path.clone())?),
        None => {
            let mut code = String::new();
            std::io::stdin().read_to_string(&mut code)?;
            registry.add(&mut BufferSource::new(code, "stdin"))
        }
    }
}
