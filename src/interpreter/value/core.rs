/// The interned `true` value.
pub const TRUE: Value = Value::Boolean(true);
/// The interned `false` value.
pub const FALSE: Value = Value::Boolean(false);
/// The interned null value.
pub const NULL: Value = Value::Null;

/// Represents a runtime value in the interpreter.
///
/// Values are immutable once produced. Their [`Display`](std::fmt::Display)
/// form is the inspect string shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// The absence of a meaningful value.
    Null,
}

/// The type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Tag of [`Value::Integer`].
    Integer,
    /// Tag of [`Value::Boolean`].
    Boolean,
    /// Tag of [`Value::Null`].
    Null,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    /// Returns one of the interned boolean constants.
    fn from(v: bool) -> Self {
        if v { TRUE } else { FALSE }
    }
}

impl Value {
    /// Returns the type tag of the value.
    ///
    /// ## Example
    /// ```
    /// use maron::interpreter::value::core::{Value, ValueType};
    ///
    /// assert_eq!(Value::Integer(5).value_type(), ValueType::Integer);
    /// assert_eq!(Value::Integer(5).value_type().to_string(), "INTEGER");
    /// ```
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Integer,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Null => ValueType::Null,
        }
    }

    /// Returns the inspect string of the value.
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::Null => "NULL",
        };
        write!(f, "{tag}")
    }
}
