// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `storage` object: a keyed store of document objects.

use tether_core::{Kind, Map, Value};

use crate::dispatch::Invocation;
use crate::registry::{AutomationObject, WarnSink};
use crate::schema::{Arg, Args, Command, CommandError};

/// Keyed document store. Unlike `cache` it only accepts object-shaped
/// values, and reads of absent keys are an error rather than null.
pub struct Storage {
    name: String,
    documents: Map,
}

pub(crate) fn constructor() -> Command {
    Command::fixed(
        "storage",
        "keyed store of document objects",
        vec![Arg::optional("config", Value::object())],
        construct,
    )
}

pub(crate) fn methods() -> Command {
    Command::group(
        "storage",
        "methods of a storage object",
        vec![
            Command::fixed(
                "write",
                "store a document under a key",
                vec![Arg::required("key", Kind::String), Arg::required("doc", Kind::Object)],
                super::call_method,
            ),
            Command::fixed(
                "read",
                "fetch the document under a key",
                vec![Arg::required("key", Kind::String)],
                super::call_method,
            ),
            Command::fixed("list", "report every stored key", Vec::new(), super::call_method),
            Command::fixed(
                "remove",
                "drop the document under a key",
                vec![Arg::required("key", Kind::String)],
                super::call_method,
            ),
            Command::fixed("get_name", "report the object's name", Vec::new(), super::call_method),
        ],
    )
}

fn construct(inv: &mut Invocation<'_>, args: &Args) -> Result<Vec<Value>, CommandError> {
    let config = args.object("config")?;
    let name = super::object_name("storage", config, inv.registry().next_handle())?;
    let storage = Storage { name, documents: Map::new() };
    Ok(vec![inv.register(Box::new(storage)).into()])
}

impl AutomationObject for Storage {
    fn type_name(&self) -> &'static str {
        "storage"
    }

    fn invoke(
        &mut self,
        method: &str,
        args: &Args,
        _warn: &mut WarnSink<'_>,
    ) -> Result<Vec<Value>, CommandError> {
        match method {
            "write" => {
                let key = args.str("key")?;
                let doc = args.value("doc")?.clone();
                self.documents.insert(key.to_string(), doc);
                Ok(Vec::new())
            }
            "read" => {
                let key = args.str("key")?;
                match self.documents.get(key) {
                    Some(doc) => Ok(vec![doc.clone()]),
                    None => Err(no_entry(key)),
                }
            }
            "list" => {
                let keys = self.documents.keys().cloned().map(Value::from).collect::<Vec<_>>();
                Ok(vec![Value::Array(keys)])
            }
            "remove" => {
                let key = args.str("key")?;
                match self.documents.shift_remove(key) {
                    Some(_) => Ok(Vec::new()),
                    None => Err(no_entry(key)),
                }
            }
            "get_name" => Ok(vec![self.name.clone().into()]),
            other => Err(super::unknown_method("storage", other)),
        }
    }
}

fn no_entry(key: &str) -> CommandError {
    CommandError::domain(format!("no entry '{key}'"))
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
