// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `worker` object: a single-slot job holder.

use std::time::Duration;

use tether_core::{Kind, Value};

use crate::dispatch::Invocation;
use crate::registry::{AutomationObject, WarnSink};
use crate::schema::{Arg, Args, Command, CommandError};

/// Holds at most one submitted job label until `finish` clears it. `wait`
/// blocks the whole session on purpose; request-then-reply means a stalled
/// worker stalls its caller and nobody else.
pub struct Worker {
    name: String,
    job: Option<String>,
}

pub(crate) fn constructor() -> Command {
    Command::fixed(
        "worker",
        "single-slot job holder",
        vec![Arg::optional("config", Value::object())],
        construct,
    )
}

pub(crate) fn methods() -> Command {
    Command::group(
        "worker",
        "methods of a worker object",
        vec![
            Command::fixed(
                "submit",
                "hand the worker a job label",
                vec![Arg::required("job", Kind::String)],
                super::call_method,
            ),
            Command::fixed(
                "status",
                "report whether the worker is idle or busy",
                Vec::new(),
                super::call_method,
            ),
            Command::fixed(
                "finish",
                "clear the current job and report its label",
                Vec::new(),
                super::call_method,
            ),
            Command::fixed(
                "wait",
                "block the session for a number of seconds",
                vec![Arg::required("seconds", Kind::Integer)],
                super::call_method,
            ),
            Command::fixed("get_name", "report the object's name", Vec::new(), super::call_method),
        ],
    )
}

fn construct(inv: &mut Invocation<'_>, args: &Args) -> Result<Vec<Value>, CommandError> {
    let config = args.object("config")?;
    let name = super::object_name("worker", config, inv.registry().next_handle())?;
    let worker = Worker { name, job: None };
    Ok(vec![inv.register(Box::new(worker)).into()])
}

impl AutomationObject for Worker {
    fn type_name(&self) -> &'static str {
        "worker"
    }

    fn invoke(
        &mut self,
        method: &str,
        args: &Args,
        _warn: &mut WarnSink<'_>,
    ) -> Result<Vec<Value>, CommandError> {
        match method {
            "submit" => {
                let job = args.str("job")?;
                if self.job.is_some() {
                    return Err(CommandError::domain(format!("worker '{}' is busy", self.name)));
                }
                tracing::debug!(worker = %self.name, job, "job submitted");
                self.job = Some(job.to_string());
                Ok(Vec::new())
            }
            "status" => {
                let status = if self.job.is_some() { "busy" } else { "idle" };
                Ok(vec![status.into()])
            }
            "finish" => match self.job.take() {
                Some(job) => Ok(vec![job.into()]),
                None => Err(CommandError::domain(format!("worker '{}' is idle", self.name))),
            },
            "wait" => {
                let seconds = args.integer("seconds")?;
                let seconds = u64::try_from(seconds)
                    .map_err(|_| CommandError::domain("wait: seconds must not be negative"))?;
                std::thread::sleep(Duration::from_secs(seconds));
                Ok(Vec::new())
            }
            "get_name" => Ok(vec![self.name.clone().into()]),
            other => Err(super::unknown_method("worker", other)),
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
