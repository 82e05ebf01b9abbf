// SPDX-License-Identifier: Apache-2.0

use alloc::boxed::Box;

use crate::parse_error::{from_utf8, InvalidUtf8};

/// The type tag of a [`Value`].
///
/// `Array` and `Object` belong to the JSON type system but are never
/// produced by this parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
    String,
    Array,
    Object,
}

/// A parsed JSON value.
///
/// Assigning a new variant drops the payload of the old one, so replacing a
/// `String` value releases its storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// `null`, and the state of a value after a failed parse.
    #[default]
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// Any JSON number, stored as `f64`.
    Number(f64),
    /// A decoded string. Holds raw bytes since escapes are decoded byte-wise.
    String(Box<[u8]>),
}

impl Value {
    /// Returns the type tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(false) => ValueType::False,
            Value::Bool(true) => ValueType::True,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean if this is `true` or `false`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string bytes if this is a `String`.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(&s[..]),
            _ => None,
        }
    }

    /// Returns the string length in bytes if this is a `String`.
    pub fn string_len(&self) -> Option<usize> {
        self.as_bytes().map(<[u8]>::len)
    }

    /// Returns the string as `&str` if this is a `String`.
    ///
    /// Escapes are decoded byte-wise, so a string value is not guaranteed
    /// to be valid UTF-8; the outer `Option` is `None` for non-strings.
    pub fn as_str(&self) -> Option<Result<&str, InvalidUtf8>> {
        self.as_bytes().map(from_utf8)
    }

    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    pub fn set_bool(&mut self, b: bool) {
        *self = Value::Bool(b);
    }

    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// Replaces this value with a copy of `bytes` as a `String`.
    pub fn set_string(&mut self, bytes: &[u8]) {
        *self = Value::String(Box::from(bytes));
    }

    /// Releases any owned payload and resets to `Null`.
    pub fn clear(&mut self) {
        self.set_null();
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::String(Box::from(bytes))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::from(s.as_bytes())
    }
}
