// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `cache` object: a keyed store of arbitrary values.

use tether_core::{Kind, Map, Value};

use crate::dispatch::Invocation;
use crate::registry::{AutomationObject, WarnSink};
use crate::schema::{Arg, Args, Command, CommandError};

/// String-keyed value store. Reads of absent keys answer null rather than
/// failing; `delete` reports whether the key existed.
pub struct Cache {
    name: String,
    entries: Map,
}

pub(crate) fn constructor() -> Command {
    Command::fixed(
        "cache",
        "keyed store of values",
        vec![Arg::optional("config", Value::object())],
        construct,
    )
}

pub(crate) fn methods() -> Command {
    Command::group(
        "cache",
        "methods of a cache object",
        vec![
            Command::variadic("put", "store a value under a key", "<key> <value>", super::call_method),
            Command::fixed(
                "get",
                "read the value under a key, null when absent",
                vec![Arg::required("key", Kind::String)],
                super::call_method,
            ),
            Command::fixed(
                "delete",
                "drop a key, reporting whether it existed",
                vec![Arg::required("key", Kind::String)],
                super::call_method,
            ),
            Command::fixed(
                "len",
                "report the number of stored entries",
                Vec::new(),
                super::call_method,
            ),
            Command::fixed("get_name", "report the object's name", Vec::new(), super::call_method),
        ],
    )
}

fn construct(inv: &mut Invocation<'_>, args: &Args) -> Result<Vec<Value>, CommandError> {
    let config = args.object("config")?;
    let name = super::object_name("cache", config, inv.registry().next_handle())?;
    let cache = Cache { name, entries: Map::new() };
    Ok(vec![inv.register(Box::new(cache)).into()])
}

impl AutomationObject for Cache {
    fn type_name(&self) -> &'static str {
        "cache"
    }

    fn invoke(
        &mut self,
        method: &str,
        args: &Args,
        _warn: &mut WarnSink<'_>,
    ) -> Result<Vec<Value>, CommandError> {
        match method {
            "put" => {
                let (key, value) = put_args(args)?;
                self.entries.insert(key, value);
                Ok(Vec::new())
            }
            "get" => {
                let key = args.str("key")?;
                Ok(vec![self.entries.get(key).cloned().unwrap_or(Value::Null)])
            }
            "delete" => {
                let key = args.str("key")?;
                Ok(vec![self.entries.shift_remove(key).is_some().into()])
            }
            "len" => Ok(vec![(self.entries.len() as i64).into()]),
            "get_name" => Ok(vec![self.name.clone().into()]),
            other => Err(super::unknown_method("cache", other)),
        }
    }
}

/// `put` leaves the value slot kind-free, which a fixed schema cannot
/// express, so it is declared variadic and arity and key kind are enforced
/// here.
fn put_args(args: &Args) -> Result<(String, Value), CommandError> {
    match args.rest() {
        [key, value] => {
            let key = key.as_str().map_err(|_| CommandError::ArgumentKind {
                command: "put".into(),
                name: "key".into(),
                expected: Kind::String,
            })?;
            Ok((key.to_string(), value.clone()))
        }
        [] | [_] => Err(CommandError::MissingArguments { command: "put".into() }),
        _ => Err(CommandError::TooManyArguments { command: "put".into() }),
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
