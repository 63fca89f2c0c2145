// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Conversions between protocol values and `serde_json::Value`.
//!
//! Used by the debug console (textual JSON lines) and the diagnostic trace
//! log (pretty-printing). The wire codec never goes through serde_json.

use serde_json::Value as Json;
use thiserror::Error;

use crate::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// JSON numbers outside the i64 range (floats included) have no
    /// protocol representation.
    #[error("number {raw} has no integer representation")]
    NonIntegerNumber { raw: String },
}

/// Render a protocol value as standard JSON. Total: every protocol value
/// has a JSON form.
pub fn to_json(value: &Value) -> Json {
    match value {
        Value::Object(map) => {
            Json::Object(map.iter().map(|(k, v)| (k.clone(), to_json(v))).collect())
        }
        Value::Array(items) => Json::Array(items.iter().map(to_json).collect()),
        Value::String(s) => Json::String(s.clone()),
        Value::Integer(n) => Json::Number((*n).into()),
        Value::Boolean(b) => Json::Bool(*b),
        Value::Null => Json::Null,
    }
}

/// Read standard JSON into a protocol value. Fails on any number that is
/// not exactly an i64.
pub fn from_json(json: &Json) -> Result<Value, ConvertError> {
    match json {
        Json::Object(map) => {
            let mut out = Map::new();
            for (k, v) in map {
                out.insert(k.clone(), from_json(v)?);
            }
            Ok(Value::Object(out))
        }
        Json::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(from_json(item)?);
            }
            Ok(Value::Array(out))
        }
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Number(n) => n
            .as_i64()
            .map(Value::Integer)
            .ok_or_else(|| ConvertError::NonIntegerNumber { raw: n.to_string() }),
        Json::Bool(b) => Ok(Value::Boolean(*b)),
        Json::Null => Ok(Value::Null),
    }
}

impl From<&Value> for Json {
    fn from(value: &Value) -> Self {
        to_json(value)
    }
}

impl TryFrom<&Json> for Value {
    type Error = ConvertError;

    fn try_from(json: &Json) -> Result<Self, Self::Error> {
        from_json(json)
    }
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
