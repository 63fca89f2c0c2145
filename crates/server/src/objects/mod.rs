// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in automation object types.
//!
//! Each type contributes a constructor command (a child of `new`) and a
//! method table the dispatcher routes handles through. Constructors share
//! one calling convention: a single optional `config` object, where a
//! `name` key overrides the generated `<type>-<handle>` object name. A
//! constructor that rejects its config registers nothing.

pub mod cache;
pub mod queue;
pub mod storage;
pub mod worker;

use tether_core::{Map, Value};

use crate::dispatch::Invocation;
use crate::schema::{Args, Command, CommandError};

/// Constructor commands, in help order.
pub(crate) fn constructors() -> Vec<Command> {
    vec![queue::constructor(), cache::constructor(), storage::constructor(), worker::constructor()]
}

/// Method tables, one group per type, named after the type.
pub(crate) fn method_tables() -> Vec<Command> {
    vec![queue::methods(), cache::methods(), storage::methods(), worker::methods()]
}

/// Leaf handler shared by every method table: forward the bound arguments
/// to the routed object.
fn call_method(inv: &mut Invocation<'_>, args: &Args) -> Result<Vec<Value>, CommandError> {
    inv.call_target(args)
}

/// Object name from config, or `<type>-<handle>` when absent.
fn object_name(type_name: &str, config: &Map, handle: i64) -> Result<String, CommandError> {
    match config.get("name") {
        None => Ok(format!("{type_name}-{handle}")),
        Some(value) => value.as_str().map(str::to_string).map_err(|_| {
            CommandError::domain(format!("{type_name}: config key 'name' must be a string"))
        }),
    }
}

fn config_integer(type_name: &str, config: &Map, key: &str) -> Result<Option<i64>, CommandError> {
    match config.get(key) {
        None => Ok(None),
        Some(value) => value.as_i64().map(Some).map_err(|_| {
            CommandError::domain(format!("{type_name}: config key '{key}' must be an integer"))
        }),
    }
}

// A method the table admitted but the object does not implement. The
// tables and the invoke matches are maintained together; disagreement is
// a server bug, not a client error.
fn unknown_method(type_name: &str, method: &str) -> CommandError {
    CommandError::Internal { detail: format!("{type_name}: no method '{method}'") }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
