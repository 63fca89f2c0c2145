// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The request dispatcher: one decoded message in, one reply out.
//!
//! A [`Dispatcher`] owns the command table and the object registry and runs
//! the whole request strictly serially: a message is routed, its handler
//! runs to completion (blocking the session if it blocks), and only then is
//! the next message considered. Failures split into two tiers. Anything a
//! leaf handler rejects is caught and answered as `[false, <message>]`;
//! running out of elements while still walking group structure means the
//! client is not speaking the protocol at all and escalates to a
//! session-fatal [`WalkError`].

use std::time::Duration;

use thiserror::Error;

use tether_core::{Kind, Value};

use crate::env::PROTOCOL_VERSION;
use crate::objects;
use crate::protocol::{self, Warning};
use crate::registry::{AutomationObject, Registry};
use crate::schema::help::{render_path, render_root};
use crate::schema::{bind, Arg, Args, Command, CommandError, Matcher, Shape};

/// The dispatcher ran out of message elements while a group was still
/// selecting a child. Escalated to session termination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{command}: insufficient number of arguments")]
pub struct WalkError {
    pub command: String,
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Between messages, waiting for input.
    Idle,
    /// A message is being routed or its handler is running.
    Dispatching,
    /// The session is over; no further message is accepted.
    Done,
}

/// The outcome of one dispatched message. Warnings precede the reply on
/// the wire; a `None` reply means the session ended without one (`exit`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub warnings: Vec<Warning>,
    pub reply: Option<Value>,
}

/// Command table, registry, and per-session state behind one channel.
pub struct Dispatcher {
    root: Command,
    registry: Registry,
    process_name: String,
    context: Option<String>,
    state: SessionState,
}

impl Dispatcher {
    pub fn new(process_name: impl Into<String>) -> Self {
        Self {
            root: table(),
            registry: Registry::new(),
            process_name: process_name.into(),
            context: None,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Caller-supplied context string, set by `set_context`.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Route one decoded message and produce its reply. Caught failures
    /// come back inside [`Dispatched`]; a [`WalkError`] ends the session.
    pub fn dispatch(&mut self, message: &Value) -> Result<Dispatched, WalkError> {
        self.state = SessionState::Dispatching;
        let mut warnings = Vec::new();
        let mut exiting = false;
        let outcome = {
            let mut invocation = Invocation {
                root: &self.root,
                registry: &mut self.registry,
                warnings: &mut warnings,
                context: &mut self.context,
                process_name: &self.process_name,
                target: None,
                exiting: &mut exiting,
            };
            invocation.route(message)
        };
        let reply = match outcome {
            Ok(_) if exiting => {
                tracing::info!("exit requested");
                None
            }
            Ok(results) => Some(protocol::ok(results)),
            Err(RouteError::Caught(err)) => {
                tracing::debug!(error = %err, "request failed");
                Some(protocol::fail(&err.to_string()))
            }
            Err(RouteError::Fatal(err)) => {
                self.state = SessionState::Done;
                return Err(err);
            }
        };
        self.state = if exiting { SessionState::Done } else { SessionState::Idle };
        Ok(Dispatched { warnings, reply })
    }
}

enum RouteError {
    /// Answered as `[false, <message>]`; the session continues.
    Caught(CommandError),
    /// Ends the session.
    Fatal(WalkError),
}

impl From<CommandError> for RouteError {
    fn from(err: CommandError) -> Self {
        RouteError::Caught(err)
    }
}

/// Everything a handler may touch while it runs: the registry, the warning
/// queue, the session context, and the routed target handle (set when the
/// message selected an object method rather than a named command).
pub struct Invocation<'a> {
    root: &'a Command,
    registry: &'a mut Registry,
    warnings: &'a mut Vec<Warning>,
    context: &'a mut Option<String>,
    process_name: &'a str,
    target: Option<i64>,
    exiting: &'a mut bool,
}

impl Invocation<'_> {
    pub fn process_name(&self) -> &str {
        self.process_name
    }

    /// The full command table, for handlers that introspect it.
    pub fn root(&self) -> &Command {
        self.root
    }

    pub fn registry(&self) -> &Registry {
        self.registry
    }

    pub fn register(&mut self, object: Box<dyn AutomationObject>) -> i64 {
        self.registry.insert(object)
    }

    pub fn remove_object(&mut self, handle: i64) -> Result<(), CommandError> {
        self.registry.remove(handle)
    }

    pub fn set_context(&mut self, context: &str) {
        tracing::info!(context, "session context set");
        *self.context = Some(context.to_string());
    }

    /// Stop the session after the current message, without a reply.
    pub fn end_session(&mut self) {
        *self.exiting = true;
    }

    /// Forward the bound arguments to the routed object, under the method
    /// name the table selected.
    pub fn call_target(&mut self, args: &Args) -> Result<Vec<Value>, CommandError> {
        let handle = self.target.ok_or_else(|| CommandError::Internal {
            detail: format!("{}: no invocation target", args.command()),
        })?;
        self.registry.invoke(handle, args.command(), args, self.warnings)
    }

    fn route(&mut self, message: &Value) -> Result<Vec<Value>, RouteError> {
        let elements = message
            .as_array()
            .map_err(|_| CommandError::Malformed { detail: "message must be an array" })?;
        match elements.split_first() {
            Some((head, rest)) => {
                let root = self.root;
                self.select(root, head, rest)
            }
            None => Err(CommandError::Malformed { detail: "message must not be empty" }.into()),
        }
    }

    /// Consume `head` to pick a child of `group`, then keep walking.
    fn select(
        &mut self,
        group: &Command,
        head: &Value,
        rest: &[Value],
    ) -> Result<Vec<Value>, RouteError> {
        let Shape::Group { matcher, children } = group.shape() else {
            return Err(CommandError::Internal {
                detail: format!("'{}' is not a group", group.name()),
            }
            .into());
        };
        match (head, matcher) {
            (Value::String(name), _) => {
                let child = children
                    .iter()
                    .find(|child| child.name() == name.as_str())
                    .ok_or_else(|| CommandError::UnknownCommand { name: name.clone() })?;
                self.run(child, rest)
            }
            (Value::Integer(handle), Matcher::Dispatch { objects }) => {
                let type_name = self
                    .registry
                    .type_of(*handle)
                    .ok_or(CommandError::NoSuchObject { handle: *handle })?;
                let table = objects
                    .iter()
                    .find(|table| table.name() == type_name)
                    .ok_or_else(|| CommandError::Internal {
                        detail: format!("no method table for object type '{type_name}'"),
                    })?;
                self.target = Some(*handle);
                self.run(table, rest)
            }
            (_, Matcher::Dispatch { .. }) => Err(CommandError::Malformed {
                detail: "command selector must be a string or object handle",
            }
            .into()),
            (_, Matcher::Name) => {
                Err(CommandError::Malformed { detail: "command selector must be a string" }.into())
            }
        }
    }

    fn run(&mut self, command: &Command, elements: &[Value]) -> Result<Vec<Value>, RouteError> {
        match command.shape() {
            Shape::Fixed { args, handler } => {
                let bound = bind(command.name(), args, elements)?;
                handler(self, &bound).map_err(RouteError::Caught)
            }
            Shape::Variadic { handler, .. } => {
                let bound = Args::variadic(command.name(), elements.to_vec());
                handler(self, &bound).map_err(RouteError::Caught)
            }
            Shape::Group { .. } => match elements.split_first() {
                Some((head, rest)) => self.select(command, head, rest),
                None => Err(RouteError::Fatal(WalkError { command: command.name().to_string() })),
            },
        }
    }
}

/// The full top-level table. Built once per session; the method tables are
/// shared between the root matcher and `call`.
fn table() -> Command {
    let tables = objects::method_tables();
    Command::dispatch_group(
        "tether",
        "",
        vec![
            Command::dispatch_group(
                "call",
                "invoke a method on an automation object",
                Vec::new(),
                tables.clone(),
            ),
            Command::group("new", "construct an automation object", objects::constructors()),
            Command::fixed(
                "del",
                "destroy an automation object",
                vec![Arg::required("id", Kind::Integer)],
                del,
            ),
            Command::variadic("echo", "reply with the arguments unchanged", "[values...]", echo),
            Command::fixed(
                "sleep",
                "block the session for a number of seconds",
                vec![Arg::required("seconds", Kind::Integer)],
                sleep,
            ),
            Command::fixed(
                "version",
                "report the process name and protocol version",
                Vec::new(),
                version,
            ),
            Command::fixed(
                "whatis",
                "classify a token",
                vec![Arg::required("token", Kind::String)],
                whatis,
            ),
            Command::fixed(
                "set_context",
                "attach a caller context string to the session",
                vec![Arg::required("context", Kind::String)],
                set_context,
            ),
            Command::variadic("help", "describe the command table", "[path...]", help),
            Command::fixed("exit", "end the session", Vec::new(), exit),
        ],
        tables,
    )
}

fn del(inv: &mut Invocation<'_>, args: &Args) -> Result<Vec<Value>, CommandError> {
    let handle = args.integer("id")?;
    inv.remove_object(handle)?;
    Ok(Vec::new())
}

fn echo(_inv: &mut Invocation<'_>, args: &Args) -> Result<Vec<Value>, CommandError> {
    Ok(args.rest().to_vec())
}

fn sleep(_inv: &mut Invocation<'_>, args: &Args) -> Result<Vec<Value>, CommandError> {
    let seconds = args.integer("seconds")?;
    let seconds = u64::try_from(seconds)
        .map_err(|_| CommandError::domain("sleep: seconds must not be negative"))?;
    std::thread::sleep(Duration::from_secs(seconds));
    Ok(Vec::new())
}

fn version(inv: &mut Invocation<'_>, _args: &Args) -> Result<Vec<Value>, CommandError> {
    Ok(vec![inv.process_name().into(), PROTOCOL_VERSION.into()])
}

fn whatis(inv: &mut Invocation<'_>, args: &Args) -> Result<Vec<Value>, CommandError> {
    let token = args.str("token")?;
    Ok(vec![classify(inv, token).into()])
}

/// Best-effort classification. Command names shadow object types, which
/// shadow the numeric readings; a number that is a live handle reads as
/// `handle`, a dead or never-minted one as plain `integer`.
fn classify(inv: &Invocation<'_>, token: &str) -> &'static str {
    if inv.root().children().iter().any(|child| child.name() == token) {
        return "command";
    }
    if inv.root().objects().iter().any(|table| table.name() == token) {
        return "object-type";
    }
    if let Ok(handle) = token.parse::<i64>() {
        return if inv.registry().contains(handle) { "handle" } else { "integer" };
    }
    "unknown"
}

fn set_context(inv: &mut Invocation<'_>, args: &Args) -> Result<Vec<Value>, CommandError> {
    let context = args.str("context")?;
    inv.set_context(context);
    Ok(Vec::new())
}

fn help(inv: &mut Invocation<'_>, args: &Args) -> Result<Vec<Value>, CommandError> {
    let mut path = Vec::new();
    for element in args.rest() {
        let segment = element
            .as_str()
            .map_err(|_| CommandError::Malformed { detail: "help: path elements must be strings" })?;
        path.push(segment);
    }
    let text = if path.is_empty() {
        render_root(inv.root())
    } else {
        render_path(inv.root(), &path)
    };
    if text.is_empty() {
        return Err(CommandError::UnknownCommand { name: path.join(" ") });
    }
    Ok(vec![text.into()])
}

fn exit(inv: &mut Invocation<'_>, _args: &Args) -> Result<Vec<Value>, CommandError> {
    inv.end_session();
    Ok(Vec::new())
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
