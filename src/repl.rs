use std::io::{self, BufRead, Write};

use crate::interpreter::{
    evaluator::core::eval,
    lexer::{Lexer, TokenKind, TokenSource},
    parser::Parser,
};

/// The prompt printed before every line of input.
pub const PROMPT: &str = ">> ";

/// What the read loop does with each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplMode {
    /// Print every token of the line.
    Tokens,
    /// Parse and evaluate the line, then print the result.
    #[default]
    Eval,
}

/// Runs the read loop until `input` is exhausted.
///
/// Each line is handled on its own: nothing carries over from one line to the
/// next.
///
/// # Errors
/// Returns an error if reading from `input` or writing to `output` fails.
///
/// ## Example
/// ```
/// use maron::repl::{ReplMode, start};
///
/// let mut output = Vec::new();
/// start("5\ntrue\n".as_bytes(), &mut output, ReplMode::Eval).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), ">> 5\n>> true\n>> ");
/// ```
pub fn start<R: BufRead, W: Write>(input: R, mut output: W, mode: ReplMode) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };

        match mode {
            ReplMode::Tokens => print_tokens(&line, &mut output)?,
            ReplMode::Eval => print_result(&line, &mut output)?,
        }
    }
}

fn print_tokens<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    let mut lexer = Lexer::new(line);

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::Eof {
            return Ok(());
        }
        writeln!(output, "{token:?}")?;
    }
}

fn print_result<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    let mut parser = Parser::new(Lexer::new(line));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        writeln!(output, "parser errors:")?;
        for error in parser.errors() {
            writeln!(output, "\t{error}")?;
        }
        return Ok(());
    }

    if let Some(value) = eval(&program) {
        writeln!(output, "{value}")?;
    }

    Ok(())
}
