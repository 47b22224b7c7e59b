use std::{fs, io};

use clap::Parser;
use maron::{
    repl::{self, ReplMode},
    run,
};

/// maron is a small C-like scripting language.
///
/// Without a script, an interactive session is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells maron to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints tokens instead of evaluating. Only applies to the interactive
    /// session.
    #[arg(short, long)]
    tokens: bool,

    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        start_session(args.tokens);
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &contents);
            std::process::exit(1);
        })
    } else {
        contents
    };

    match run(&script) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(errors) => {
            eprintln!("{errors}");
            std::process::exit(1);
        },
    }
}

fn start_session(tokens: bool) {
    let user = std::env::var("USER").unwrap_or_else(|_| "there".to_string());
    println!("Hello {user}! This is the Maron programming language!");
    println!("Feel free to type in commands");

    let mode = if tokens { ReplMode::Tokens } else { ReplMode::Eval };
    if let Err(e) = repl::start(io::stdin().lock(), io::stdout().lock(), mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
