// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

/// Proptest strategies over protocol values.
pub mod strategies {
    use proptest::prelude::*;

    use crate::{Map, Value};

    /// Any atomic (non-container) value. Strings are arbitrary unicode so
    /// escaping and chunk-splitting get exercised.
    pub fn arb_atom() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Boolean),
            any::<i64>().prop_map(Value::Integer),
            any::<String>().prop_map(Value::String),
        ]
    }

    /// Any value tree: containers up to 4 levels deep, up to 6 children per
    /// node. Object keys collide occasionally; later entries win, matching
    /// the value model.
    pub fn arb_value() -> impl Strategy<Value = Value> {
        arb_atom().prop_recursive(4, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::vec(("[a-z]{0,6}", inner), 0..6).prop_map(|entries| {
                    Value::Object(entries.into_iter().collect::<Map>())
                }),
            ]
        })
    }

    /// An array-rooted message, the shape every envelope uses.
    pub fn arb_message() -> impl Strategy<Value = Value> {
        prop::collection::vec(arb_value(), 0..6).prop_map(Value::Array)
    }
}
