use std::fs::{self};

use maron::{
    interpreter::value::core::{FALSE, TRUE, Value},
    run,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code) {
                panic!("maron example {} in {:?} failed:\n{}\nError: {}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No maron examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```maron") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn eval_ok(src: &str) -> Option<Value> {
    run(src).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

#[test]
fn integer_literals_evaluate_to_integers() {
    assert_eq!(eval_ok("5"), Some(Value::Integer(5)));
    assert_eq!(eval_ok("10"), Some(Value::Integer(10)));
    assert_eq!(eval_ok("9223372036854775807"), Some(Value::Integer(i64::MAX)));
}

#[test]
fn boolean_literals_evaluate_to_interned_booleans() {
    assert_eq!(eval_ok("true"), Some(TRUE));
    assert_eq!(eval_ok("false"), Some(FALSE));
    assert_eq!(eval_ok("true;"), Some(Value::Boolean(true)));
}

#[test]
fn program_yields_last_statement() {
    assert_eq!(eval_ok("1; 2; 3"), Some(Value::Integer(3)));
    assert_eq!(eval_ok("5\n10\n"), Some(Value::Integer(10)));
    assert_eq!(eval_ok("1; true"), Some(TRUE));
    assert_eq!(eval_ok("false; 7;"), Some(Value::Integer(7)));
}

#[test]
fn empty_program_has_no_value() {
    assert_eq!(eval_ok(""), None);
    assert_eq!(eval_ok("   \n\t"), None);
}

#[test]
fn unevaluated_constructs_have_no_value() {
    assert_eq!(eval_ok("let x = 5;"), None);
    assert_eq!(eval_ok("return 5;"), None);
    assert_eq!(eval_ok("x"), None);
    assert_eq!(eval_ok("-5"), None);
    assert_eq!(eval_ok("!true"), None);
    assert_eq!(eval_ok("1 + 2"), None);
    assert_eq!(eval_ok("if (true) { 1 } else { 2 }"), None);
}

#[test]
fn last_statement_wins_even_without_value() {
    assert_eq!(eval_ok("5; let x = 1;"), None);
    assert_eq!(eval_ok("let x = 1; 5"), Some(Value::Integer(5)));
}

#[test]
fn grouping_does_not_leave_a_node() {
    assert_eq!(eval_ok("(5)"), Some(Value::Integer(5)));
    assert_eq!(eval_ok("((true))"), Some(TRUE));
}

#[test]
fn integer_literal_bases() {
    assert_eq!(eval_ok("010"), Some(Value::Integer(8)));
    assert_eq!(eval_ok("0"), Some(Value::Integer(0)));
    assert_eq!(eval_ok("007"), Some(Value::Integer(7)));
}

#[test]
fn parse_errors_are_reported() {
    let errors = run("let x 5;").unwrap_err();
    assert_eq!(errors.errors().len(), 1);
    assert_eq!(errors.to_string(),
               "Error on line 1: expected next token to be =, got INT instead");

    assert!(run("99999999999999999999").is_err());
    assert!(run("09").is_err());
    assert!(run("@").is_err());
}

#[test]
fn values_report_type_and_inspect() {
    assert_eq!(Value::Integer(-3).value_type().to_string(), "INTEGER");
    assert_eq!(TRUE.value_type().to_string(), "BOOLEAN");
    assert_eq!(Value::Null.value_type().to_string(), "NULL");

    assert_eq!(Value::Integer(-3).inspect(), "-3");
    assert_eq!(FALSE.inspect(), "false");
    assert_eq!(Value::Null.inspect(), "null");
    assert_eq!(Value::from(true), TRUE);
    assert_eq!(Value::from(42_i64), Value::Integer(42));
}
