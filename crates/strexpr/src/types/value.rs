use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dynamically-typed value used on the evaluation stack and as the payload
/// of atoms and callable arguments.
///
/// Every callable documents, per argument position, which variants it
/// accepts. [`Value::Absent`] is an explicit tag distinct from an empty
/// string; most standard operators give it defined comparison and
/// concatenation semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// The explicit null-like value.
    Absent,

    /// A boolean, produced by comparison and logical operators.
    Bool(bool),

    /// A text value.
    Text(String),

    /// A point in time, in UTC.
    DateTime(DateTime<Utc>),
}

impl Value {
    /// Check whether this value is the absent value.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Get this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get this value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a datetime, if it is one.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt)
    }
}
