//! core/value.rs
//!
//! `TypedValue` is the one value model every tag goes through,
//! no matter which tag block (ID3v2, APE, Vorbis comment...) it came from.
//!
//! - `Invalid` is a terminal marker: "parsing or conversion failed".
//! - Callers must check `is_valid()` before handing a value to a writer.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    Invalid,
}

impl TypedValue {
    pub fn is_invalid(&self) -> bool {
        matches!(self, TypedValue::Invalid)
    }

    pub fn is_valid(&self) -> bool {
        !self.is_invalid()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            TypedValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<String> for TypedValue {
    fn from(s: String) -> Self {
        TypedValue::String(s)
    }
}

impl From<&str> for TypedValue {
    fn from(s: &str) -> Self {
        TypedValue::String(s.to_owned())
    }
}

impl From<i64> for TypedValue {
    fn from(n: i64) -> Self {
        TypedValue::Integer(n)
    }
}

impl From<bool> for TypedValue {
    fn from(b: bool) -> Self {
        TypedValue::Boolean(b)
    }
}

/// Render the way the record protocol expects:
/// - booleans as `true` / `false`
/// - integers as decimal
/// - strings as-is, minus any embedded NUL bytes
/// - `Invalid` renders as nothing
impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::String(s) => {
                if s.contains('\0') {
                    f.write_str(&s.replace('\0', ""))
                } else {
                    f.write_str(s)
                }
            }
            TypedValue::Integer(n) => write!(f, "{n}"),
            TypedValue::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            TypedValue::Invalid => Ok(()),
        }
    }
}
