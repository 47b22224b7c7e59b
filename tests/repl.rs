use maron::repl::{PROMPT, ReplMode, start};

fn session(input: &str, mode: ReplMode) -> String {
    let mut output = Vec::new();
    start(input.as_bytes(), &mut output, mode).expect("in-memory io cannot fail");
    String::from_utf8(output).expect("output is utf-8")
}

#[test]
fn eval_mode_prints_values() {
    let output = session("5\n1; true\nlet x = 1;\n", ReplMode::Eval);
    assert_eq!(output, format!("{PROMPT}5\n{PROMPT}true\n{PROMPT}{PROMPT}"));
}

#[test]
fn eval_mode_prints_parser_errors() {
    let output = session("let x 5;\n", ReplMode::Eval);
    assert_eq!(output,
               format!("{PROMPT}parser errors:\n\tError on line 1: expected next token to be =, got INT instead\n{PROMPT}"));
}

#[test]
fn token_mode_prints_each_token() {
    let output = session("let x\n", ReplMode::Tokens);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("kind: Let"));
    assert!(lines[0].contains("literal: \"let\""));
    assert!(lines[1].contains("kind: Ident"));
    assert_eq!(lines[2], PROMPT);
}

#[test]
fn empty_input_only_prompts() {
    assert_eq!(session("", ReplMode::Eval), PROMPT);
    assert_eq!(session("", ReplMode::Tokens), PROMPT);
}
