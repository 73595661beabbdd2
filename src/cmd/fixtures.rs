use crate::frontend;
use crate::frontend::writer::prettyprint;
use crate::source::{BufferSource, Registry};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixture based acceptance tests.
///
/// The list file names one fixture per line. A fixture holds `|` separated
/// cases and pairs with `<fixture>.expect`, whose i-th line is either
/// `Correct result: <expected>` or `Error: <message prefix>`. The exit
/// status is the number of failing cases.
#[derive(Args, Debug)]
#[command(about = "Run fixture based acceptance tests")]
pub struct Opts {
    /// File listing one fixture path per line
    pub list: PathBuf,
}

pub fn execute(opts: &Opts) -> i32 {
    match run(&opts.list) {
        Ok(failures) => failures,
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    }
}

fn run(list: &Path) -> std::io::Result<i32> {
    let mut failures = 0;

    for fixture in fs::read_to_string(list)?.lines() {
        let fixture = fixture.trim();
        if fixture.is_empty() {
            continue;
        }
        failures += run_fixture(Path::new(fixture))?;
    }

    Ok(failures)
}

fn run_fixture(fixture: &Path) -> std::io::Result<i32> {
    let cases = fs::read_to_string(fixture)?;
    let expectations = fs::read_to_string(expect_path(fixture))?;
    let mut failures = 0;

    for (i, (case, expected)) in cases.split('|').zip(expectations.lines()).enumerate() {
        let outcome = run_case(case);

        if !matches(&outcome, expected) {
            eprintln!(
                "FAIL {}#{}: expected `{}` but got `{}`",
                fixture.display(),
                i,
                expected,
                outcome
            );
            failures += 1;
        }
    }

    Ok(failures)
}

fn expect_path(fixture: &Path) -> PathBuf {
    let mut path = fixture.as_os_str().to_os_string();
    path.push(".expect");
    PathBuf::from(path)
}

/// Pretty print all datums of the case, space separated; errors print
/// their message.
fn run_case(case: &str) -> String {
    let mut registry = Registry::new();
    let source = match registry.add(&mut BufferSource::new(case, "fixture")) {
        Ok(source) => source,
        Err(e) => return format!("{}", e),
    };

    match frontend::read(&source) {
        Ok(datums) => {
            let parts: Vec<String> = datums.iter().map(prettyprint).collect();
            parts.join(" ")
        }
        Err(e) => format!("{}", e),
    }
}

fn matches(outcome: &str, expected: &str) -> bool {
    if let Some(expected) = expected.strip_prefix("Correct result: ") {
        outcome == expected
    } else if let Some(prefix) = expected.strip_prefix("Error: ") {
        outcome.starts_with(prefix)
    } else {
        false
    }
}
