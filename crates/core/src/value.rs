// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The in-memory JSON value carried by protocol messages.
//!
//! Six kinds, no floating point. Object keys keep insertion order so that
//! iterating a node twice yields the same children in the same order — the
//! incremental encoder relies on that to resume mid-message.

use indexmap::IndexMap;
use thiserror::Error;

/// Object backing store. Insertion-ordered; keys unique.
pub type Map = IndexMap<String, Value>;

/// The kind tag of a [`Value`]. `Display` gives the lowercase protocol name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Object,
    Array,
    String,
    Integer,
    Boolean,
    Null,
}

crate::simple_display! {
    Kind {
        Object => "object",
        Array => "array",
        String => "string",
        Integer => "integer",
        Boolean => "boolean",
        Null => "null",
    }
}

/// A typed accessor was invoked against the wrong kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, got {actual}")]
pub struct TypeMismatch {
    pub expected: Kind,
    pub actual: Kind,
}

/// One node of a message tree. A node never changes kind after creation;
/// container children are fully formed before the container is observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Object(Map),
    Array(Vec<Value>),
    String(String),
    Integer(i64),
    Boolean(bool),
    Null,
}

impl Value {
    /// An empty object node.
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    /// An empty array node.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Object(_) => Kind::Object,
            Value::Array(_) => Kind::Array,
            Value::String(_) => Kind::String,
            Value::Integer(_) => Kind::Integer,
            Value::Boolean(_) => Kind::Boolean,
            Value::Null => Kind::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Result<&str, TypeMismatch> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(Kind::String)),
        }
    }

    pub fn as_i64(&self) -> Result<i64, TypeMismatch> {
        match self {
            Value::Integer(n) => Ok(*n),
            other => Err(other.mismatch(Kind::Integer)),
        }
    }

    pub fn as_bool(&self) -> Result<bool, TypeMismatch> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(other.mismatch(Kind::Boolean)),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], TypeMismatch> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch(Kind::Array)),
        }
    }

    pub fn as_object(&self) -> Result<&Map, TypeMismatch> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.mismatch(Kind::Object)),
        }
    }

    /// Consume an array node, yielding its elements.
    pub fn into_array(self) -> Result<Vec<Value>, TypeMismatch> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch(Kind::Array)),
        }
    }

    /// Append to an array node.
    pub fn push(&mut self, item: Value) -> Result<(), TypeMismatch> {
        match self {
            Value::Array(items) => {
                items.push(item);
                Ok(())
            }
            other => Err(other.mismatch(Kind::Array)),
        }
    }

    /// Set or overwrite a key in an object node.
    pub fn insert(&mut self, key: impl Into<String>, item: Value) -> Result<(), TypeMismatch> {
        match self {
            Value::Object(map) => {
                map.insert(key.into(), item);
                Ok(())
            }
            other => Err(other.mismatch(Kind::Object)),
        }
    }

    fn mismatch(&self, expected: Kind) -> TypeMismatch {
        TypeMismatch { expected, actual: self.kind() }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
