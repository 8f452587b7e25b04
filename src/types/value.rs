// Inspired by `serde_yaml::Value`

use serde_yaml::Number;
use std::hash::{Hash, Hasher};
use std::mem;

/// Represents a single type-erased scalar produced by `List::map` and consumed by
/// `List::copy_from`.
///
/// The set of variants covers the scalar types which can appear in a list: booleans, numbers and
/// strings. `Null` exists so that `Value` has a sensible default and so that map callbacks can
/// signal "no value"; a `Null` can't be recovered as any list element type.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Represents the absence of a value.
    Null,
    /// Represents a boolean value.
    Bool(bool),
    /// Represents a numerical value.
    Number(Number),
    /// Represents a string value.
    String(String),
}

impl std::fmt::Display for Value {
    /// Pretty prints the `Value`
    ///
    /// Strings are rendered with surrounding quotes, so that a mismatch reported for the string
    /// `"5"` can be told apart from one reported for the number `5`.
    ///
    /// # Example
    ///
    /// ```
    /// use collections_rs::types::Value;
    ///
    /// assert_eq!(Value::from("foo").to_string(), r#""foo""#);
    /// assert_eq!(Value::from(5).to_string(), "5");
    /// assert_eq!(Value::Null.to_string(), "Null");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "\"{s}\""),
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(v) => v.hash(state),
            Self::Number(v) => v.hash(state),
            Self::String(v) => v.hash(state),
        }
    }
}

/// The default value is `Value::Null`.
impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl Value {
    /// Checks if the `Value` is `Null`.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Checks if the `Value` is a boolean.
    #[inline]
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// If the `Value` is a Boolean, return the associated bool. Returns None otherwise.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns true if the `Value` is an integer between `i64::MIN` and `i64::MAX`.
    ///
    /// For any value for which `is_i64` returns true, `as_i64` is guaranteed to return the
    /// integer value.
    #[inline]
    #[must_use]
    pub fn is_i64(&self) -> bool {
        match self {
            Self::Number(n) => n.is_i64(),
            _ => false,
        }
    }

    /// If the `Value` is an integer, represent it as i64 if possible. Returns None otherwise.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Returns true if the `Value` is an integer between `u64::MIN` and `u64::MAX`.
    ///
    /// For any value for which `is_u64` returns true, `as_u64` is guaranteed to return the
    /// integer value.
    #[inline]
    #[must_use]
    pub fn is_u64(&self) -> bool {
        match self {
            Self::Number(n) => n.is_u64(),
            _ => false,
        }
    }

    /// If the `Value` is an integer, represent it as u64 if possible. Returns None otherwise.
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    /// Returns true if the `Value` can be represented by f64.
    ///
    /// For any value for which `is_f64` returns true, `as_f64` is guaranteed to return the
    /// floating point value.
    ///
    /// Because we rely on the `serde_yaml::Number` type to implement this function, it currently
    /// returns true if and only if both `is_i64` and `is_u64` return false, but since serde_yaml
    /// doesn't guarantee this behavior in the future, this may change.
    #[inline]
    #[must_use]
    pub fn is_f64(&self) -> bool {
        match self {
            Self::Number(n) => n.is_f64(),
            _ => false,
        }
    }

    /// If the `Value` is a number, represent it as f64 if possible. Returns None otherwise.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Checks if the `Value` is a String.
    ///
    /// For any value for which `is_string()` returns true, `as_str` is guaranteed to return the
    /// string slice.
    #[inline]
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// If the `Value` is a String, returns the associated str. Returns None otherwise.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}
