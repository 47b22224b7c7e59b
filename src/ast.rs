use std::fmt;

use crate::interpreter::lexer::Token;

/// Behaviour shared by every syntax tree node.
///
/// A node reports the literal text of the token it originated from and
/// renders itself back to a fully parenthesized, source-like form through
/// [`fmt::Display`]. The rendered form is deterministic and is what the parser
/// tests compare against.
pub trait Node: fmt::Display {
    /// The literal text of the token this node originated from.
    fn token_literal(&self) -> &str;
}

/// The root of a parsed source: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl Node for Program {
    /// The first statement's token literal, or `""` for an empty program.
    fn token_literal(&self) -> &str {
        self.statements.first().map_or("", |statement| statement.token_literal())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|statement| write!(f, "{statement}"))
    }
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The `let` token.
        token: Token,
        /// The identifier being bound.
        name:  Identifier,
        /// The bound expression. Not parsed yet, so always absent.
        value: Option<Expression>,
    },
    /// `return <value>;`
    Return {
        /// The `return` token.
        token:        Token,
        /// The returned expression. Not parsed yet, so always absent.
        return_value: Option<Expression>,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The first token of the expression.
        token:      Token,
        /// The expression, absent if it failed to parse.
        expression: Option<Expression>,
    },
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Self::Let { token, .. } | Self::Return { token, .. } | Self::Expression { token, .. } => {
                &token.literal
            },
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { token, name, value } => {
                write!(f, "{} {name} = ", token.literal)?;
                if let Some(value) = value {
                    write!(f, "{value}")?;
                }
                write!(f, ";")
            },
            Self::Return { token,
                           return_value, } => {
                write!(f, "{} ", token.literal)?;
                if let Some(value) = return_value {
                    write!(f, "{value}")?;
                }
                write!(f, ";")
            },
            Self::Expression { expression, .. } => match expression {
                Some(expression) => write!(f, "{expression}"),
                None => Ok(()),
            },
        }
    }
}

/// A brace-delimited sequence of statements, as used by `if` branches.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The `{` token.
    pub token:      Token,
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

impl Node for BlockStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|statement| write!(f, "{statement}"))
    }
}

/// A name, such as `x` in `let x = 5;`.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The identifier token.
    pub token: Token,
    /// The name itself.
    pub value: String,
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Children that failed to parse are stored as `None`, so a malformed inner
/// expression leaves a partially absent tree behind rather than discarding
/// the whole expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Reference to a name.
    Identifier(Identifier),
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The `INT` token.
        token: Token,
        /// The converted value.
        value: i64,
    },
    /// `true` or `false`.
    Boolean {
        /// The `TRUE` or `FALSE` token.
        token: Token,
        /// The literal's truth value.
        value: bool,
    },
    /// A prefix operation such as `-x` or `!ok`.
    Prefix {
        /// The operator token.
        token:    Token,
        /// The operator text, `!` or `-`.
        operator: String,
        /// The operand.
        right:    Option<Box<Self>>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// The operator token.
        token:    Token,
        /// Left operand, absent if the prefix part failed to parse.
        left:     Option<Box<Self>>,
        /// The operator text.
        operator: String,
        /// Right operand.
        right:    Option<Box<Self>>,
    },
    /// `if (<condition>) { ... } else { ... }`
    If {
        /// The `if` token.
        token:       Token,
        /// The condition expression.
        condition:   Option<Box<Self>>,
        /// Block taken when the condition holds.
        consequence: BlockStatement,
        /// Optional block taken otherwise.
        alternative: Option<BlockStatement>,
    },
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Self::Identifier(identifier) => identifier.token_literal(),
            Self::IntegerLiteral { token, .. }
            | Self::Boolean { token, .. }
            | Self::Prefix { token, .. }
            | Self::Infix { token, .. }
            | Self::If { token, .. } => &token.literal,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::IntegerLiteral { token, .. } | Self::Boolean { token, .. } => {
                write!(f, "{}", token.literal)
            },
            Self::Prefix { operator, right, .. } => {
                write!(f, "({operator}{})", Optional(right.as_deref()))
            },
            Self::Infix { left,
                          operator,
                          right,
                          .. } => {
                write!(f,
                       "({} {operator} {})",
                       Optional(left.as_deref()),
                       Optional(right.as_deref()))
            },
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if{} {consequence}", Optional(condition.as_deref()))?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
        }
    }
}

/// Renders an absent child as nothing.
struct Optional<'a>(Option<&'a Expression>);

impl fmt::Display for Optional<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(expression) => write!(f, "{expression}"),
            None => Ok(()),
        }
    }
}

/// A borrowed view of any node, used as the evaluator's input.
///
/// ## Example
/// ```
/// use maron::ast::{NodeRef, Program};
///
/// let program = Program::default();
/// assert!(matches!(NodeRef::from(&program), NodeRef::Program(_)));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    /// The tree root.
    Program(&'a Program),
    /// A statement.
    Statement(&'a Statement),
    /// A block of statements.
    Block(&'a BlockStatement),
    /// An expression.
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for NodeRef<'a> {
    fn from(program: &'a Program) -> Self {
        Self::Program(program)
    }
}

impl<'a> From<&'a Statement> for NodeRef<'a> {
    fn from(statement: &'a Statement) -> Self {
        Self::Statement(statement)
    }
}

impl<'a> From<&'a BlockStatement> for NodeRef<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Self::Block(block)
    }
}

impl<'a> From<&'a Expression> for NodeRef<'a> {
    fn from(expression: &'a Expression) -> Self {
        Self::Expression(expression)
    }
}
