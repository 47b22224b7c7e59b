use crate::{
    ast::{Expression, NodeRef, Statement},
    interpreter::value::core::Value,
};

/// Evaluates a syntax tree node and returns the resulting value.
///
/// This is the main entry point for evaluation. It accepts any node through
/// [`NodeRef`] and dispatches on its variant:
/// - a program evaluates its statements in order and yields the last result,
/// - an expression statement yields its expression,
/// - integer and boolean literals yield the matching value.
///
/// `let`, `return`, blocks, identifiers, prefix, infix and `if` expressions
/// have no runtime meaning yet and yield `None`, as does an empty program.
///
/// # Parameters
/// - `node`: The node to evaluate, e.g. `&program` or `&expression`.
///
/// # Returns
/// `Some(Value)` for nodes that produce a value, or `None` otherwise.
///
/// ## Example
/// ```
/// use maron::interpreter::{
///     evaluator::core::eval,
///     lexer::Lexer,
///     parser::Parser,
///     value::core::Value,
/// };
///
/// let program = Parser::new(Lexer::new("5; true; 10")).parse_program();
///
/// assert_eq!(eval(&program), Some(Value::Integer(10)));
/// ```
pub fn eval<'a>(node: impl Into<NodeRef<'a>>) -> Option<Value> {
    match node.into() {
        NodeRef::Program(program) => eval_statements(&program.statements),
        NodeRef::Statement(statement) => eval_statement(statement),
        NodeRef::Expression(expression) => eval_expression(expression),
        NodeRef::Block(_) => None,
    }
}

/// Evaluates statements in order. Only the last statement's result is kept.
fn eval_statements(statements: &[Statement]) -> Option<Value> {
    statements.iter().fold(None, |_, statement| eval_statement(statement))
}

fn eval_statement(statement: &Statement) -> Option<Value> {
    match statement {
        Statement::Expression { expression, .. } => expression.as_ref().and_then(eval_expression),
        Statement::Let { .. } | Statement::Return { .. } => None,
    }
}

fn eval_expression(expression: &Expression) -> Option<Value> {
    match expression {
        Expression::IntegerLiteral { value, .. } => Some(Value::Integer(*value)),
        Expression::Boolean { value, .. } => Some(Value::from(*value)),
        Expression::Identifier(_)
        | Expression::Prefix { .. }
        | Expression::Infix { .. }
        | Expression::If { .. } => None,
    }
}
