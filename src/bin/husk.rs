use clap::{Parser, Subcommand};
use husk::cmd;

#[derive(Parser, Debug)]
#[command(name = "husk", version, about = "Tokenize, read and parse scheme sources")]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tokenize stdin and print the token dump
    Tokens(cmd::tokens::Opts),
    /// Read stdin and pretty print each datum
    Print(cmd::print::Opts),
    /// Run fixture based acceptance tests
    Fixtures(cmd::fixtures::Opts),
    /// Interactive reader
    Repl(cmd::repl::Opts),
}

fn main() {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let code = match &opts.command {
        Command::Tokens(opts) => cmd::tokens::execute(opts),
        Command::Print(opts) => cmd::print::execute(opts),
        Command::Fixtures(opts) => cmd::fixtures::execute(opts),
        Command::Repl(opts) => cmd::repl::execute(opts),
    };

    std::process::exit(code);
}
