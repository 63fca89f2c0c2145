// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `queue` object: an in-memory FIFO of arbitrary values.

use std::collections::VecDeque;

use tether_core::Value;

use crate::dispatch::Invocation;
use crate::registry::{AutomationObject, WarnSink};
use crate::schema::{Arg, Args, Command, CommandError};

/// FIFO of values with an optional depth threshold. Crossing the
/// threshold warns but never rejects the push.
pub struct Queue {
    name: String,
    items: VecDeque<Value>,
    high_water: Option<i64>,
}

pub(crate) fn constructor() -> Command {
    Command::fixed(
        "queue",
        "in-memory FIFO of values",
        vec![Arg::optional("config", Value::object())],
        construct,
    )
}

pub(crate) fn methods() -> Command {
    Command::group(
        "queue",
        "methods of a queue object",
        vec![
            Command::variadic(
                "push",
                "append items to the queue",
                "<item> [items...]",
                super::call_method,
            ),
            Command::fixed("pop", "take the oldest item", Vec::new(), super::call_method),
            Command::fixed(
                "len",
                "report the number of queued items",
                Vec::new(),
                super::call_method,
            ),
            Command::fixed("clear", "drop every queued item", Vec::new(), super::call_method),
            Command::fixed("get_name", "report the object's name", Vec::new(), super::call_method),
        ],
    )
}

/// Recognized config keys: `name`, `high_water` (integer depth threshold).
fn construct(inv: &mut Invocation<'_>, args: &Args) -> Result<Vec<Value>, CommandError> {
    let config = args.object("config")?;
    let name = super::object_name("queue", config, inv.registry().next_handle())?;
    let high_water = super::config_integer("queue", config, "high_water")?;
    let queue = Queue { name, items: VecDeque::new(), high_water };
    Ok(vec![inv.register(Box::new(queue)).into()])
}

impl AutomationObject for Queue {
    fn type_name(&self) -> &'static str {
        "queue"
    }

    fn invoke(
        &mut self,
        method: &str,
        args: &Args,
        warn: &mut WarnSink<'_>,
    ) -> Result<Vec<Value>, CommandError> {
        match method {
            "push" => self.push(args.rest(), warn),
            "pop" => self.pop(),
            "len" => Ok(vec![self.depth().into()]),
            "clear" => {
                self.items.clear();
                Ok(Vec::new())
            }
            "get_name" => Ok(vec![self.name.clone().into()]),
            other => Err(super::unknown_method("queue", other)),
        }
    }
}

impl Queue {
    fn depth(&self) -> i64 {
        self.items.len() as i64
    }

    fn push(&mut self, items: &[Value], warn: &mut WarnSink<'_>) -> Result<Vec<Value>, CommandError> {
        if items.is_empty() {
            return Err(CommandError::MissingArguments { command: "push".into() });
        }
        self.items.extend(items.iter().cloned());
        let depth = self.depth();
        if let Some(high_water) = self.high_water {
            if depth > high_water {
                warn.warn(format!("queue depth {depth} exceeds high water mark {high_water}"));
            }
        }
        Ok(vec![depth.into()])
    }

    fn pop(&mut self) -> Result<Vec<Value>, CommandError> {
        match self.items.pop_front() {
            Some(item) => Ok(vec![item]),
            None => Err(CommandError::domain(format!("queue '{}' is empty", self.name))),
        }
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
