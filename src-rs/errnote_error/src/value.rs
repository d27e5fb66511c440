//! Dynamically typed values that may be offered as notes.
//!
//! Notes normally arrive as Rust strings, in which case the type system
//! already guarantees they are text. When a note comes from an untyped
//! source (a scripting layer, a config file, a deserialized payload), it is
//! represented as a [`Value`] and checked at the point of attachment.

use std::{error::Error, fmt};

/// A dynamically typed value
///
/// A value is one of:
/// - nothing
/// - a boolean
/// - an integer
/// - a float
/// - a string
/// - a list of values
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value
    None,
    /// A boolean value
    Boolean(bool),
    /// An integer value
    Integer(i64),
    /// A floating point value
    Float(f64),
    /// A string value
    String(String),
    /// A list of values
    List(Vec<Self>),
}

impl Value {
    /// Returns the type of the value.
    #[must_use]
    pub const fn type_(&self) -> ValueType {
        match self {
            Self::None => ValueType::None,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Integer(_) => ValueType::Integer,
            Self::Float(_) => ValueType::Float,
            Self::String(_) => ValueType::String,
            Self::List(_) => ValueType::List,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

/// The type of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// The type of [`Value::None`]
    None,
    /// The type of [`Value::Boolean`]
    Boolean,
    /// The type of [`Value::Integer`]
    Integer,
    /// The type of [`Value::Float`]
    Float,
    /// The type of [`Value::String`]
    String,
    /// The type of [`Value::List`]
    List,
}

impl ValueType {
    /// Returns the short name used for the type in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NoneType",
            Self::Boolean => "bool",
            Self::Integer => "int",
            Self::Float => "float",
            Self::String => "str",
            Self::List => "list",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a non-text value is offered as a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteTypeError {
    found: ValueType,
}

impl NoteTypeError {
    /// Creates a new note type error for a value of the given type.
    #[must_use]
    pub const fn new(found: ValueType) -> Self {
        Self { found }
    }

    /// Returns the type of the rejected value.
    #[must_use]
    pub const fn found(&self) -> ValueType {
        self.found
    }
}

impl fmt::Display for NoteTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "note must be a str, not '{}'", self.found)
    }
}

impl Error for NoteTypeError {}
