use maron::{
    ast::{Expression, Program, Statement},
    interpreter::{
        evaluator::core::eval,
        lexer::{Lexer, Token, TokenKind},
        parser::Parser,
        value::core::{TRUE, Value},
    },
};

fn parse(src: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(src));
    let program = parser.parse_program();

    let errors = parser.errors();
    assert!(errors.is_empty(), "{src:?} failed to parse: {errors:?}");

    program
}

#[test]
fn program_yields_its_last_statement() {
    let program = parse("1; 2; false");

    assert_eq!(eval(&program), Some(Value::Boolean(false)));
}

#[test]
fn expression_statement_yields_its_expression() {
    let program = parse("7; let x = 1;");

    assert_eq!(eval(&program.statements[0]), Some(Value::Integer(7)));
    assert_eq!(eval(&program.statements[1]), None);
}

#[test]
fn return_statement_yields_nothing() {
    let program = parse("return 5;");

    assert_eq!(eval(&program.statements[0]), None);
}

#[test]
fn literal_expressions_evaluate_directly() {
    let program = parse("true");
    let Statement::Expression { expression: Some(expression),
                                .. } = &program.statements[0]
    else {
        panic!("expected an expression statement, found {:?}", program.statements[0]);
    };

    assert_eq!(eval(expression), Some(TRUE));
}

#[test]
fn blocks_yield_nothing() {
    let program = parse("if (true) { 10 } else { 20 }");
    let Statement::Expression { expression: Some(Expression::If { consequence,
                                                                  alternative: Some(alternative),
                                                                  .. }),
                                .. } = &program.statements[0]
    else {
        panic!("expected an if expression, found {:?}", program.statements[0]);
    };

    assert_eq!(eval(consequence), None);
    assert_eq!(eval(alternative), None);
    assert_eq!(eval(&consequence.statements[0]), Some(Value::Integer(10)));
}

#[test]
fn absent_expression_statement_yields_nothing() {
    let token = Token::new(TokenKind::Int, "99999999999999999999", 1);
    let statement = Statement::Expression { token,
                                            expression: None };

    assert_eq!(eval(&statement), None);

    let program = Program { statements: vec![statement] };
    assert_eq!(eval(&program), None);
}

#[test]
fn unevaluated_operators_yield_nothing() {
    let program = parse("-1; 1 + 2; x");

    for statement in &program.statements {
        assert_eq!(eval(statement), None, "{statement}");
    }
}
