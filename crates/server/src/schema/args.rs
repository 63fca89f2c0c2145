// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use tether_core::{Kind, Map, Value};

/// A message-local dispatch failure, reported as a `[false, <message>]`
/// reply. The session continues with the next request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A required argument was absent.
    #[error("{command}: insufficient number of arguments")]
    MissingArguments { command: String },

    /// More elements supplied than the schema declares.
    #[error("{command}: too many arguments")]
    TooManyArguments { command: String },

    /// A supplied argument has the wrong kind.
    #[error("{command}: argument '{name}' must be {expected}")]
    ArgumentKind { command: String, name: String, expected: Kind },

    /// An integer element did not resolve to a live registry slot.
    #[error("Object with id '{handle}' does not exist")]
    NoSuchObject { handle: i64 },

    /// A name element matched no child of the group under search.
    #[error("unknown command '{name}'")]
    UnknownCommand { name: String },

    /// The request envelope itself is unusable.
    #[error("{detail}")]
    Malformed { detail: &'static str },

    /// Domain-level failure raised inside an object operation.
    #[error("{message}")]
    Domain { message: String },

    /// A handler contract broke; never expected over the wire.
    #[error("internal dispatch error: {detail}")]
    Internal { detail: String },
}

impl CommandError {
    /// Shorthand for a domain failure with a preformatted message.
    pub fn domain(message: impl Into<String>) -> Self {
        CommandError::Domain { message: message.into() }
    }
}

/// One positional argument descriptor: a name plus either a required kind
/// or a default value that also fixes the accepted kind.
#[derive(Debug, Clone)]
pub struct Arg {
    name: &'static str,
    requirement: Requirement,
}

#[derive(Debug, Clone)]
enum Requirement {
    Required(Kind),
    Optional(Value),
}

impl Arg {
    pub fn required(name: &'static str, kind: Kind) -> Self {
        Self { name, requirement: Requirement::Required(kind) }
    }

    /// Optional argument: absence or `null` binds the default; any other
    /// kind mismatch against the default's kind is rejected.
    pub fn optional(name: &'static str, default: impl Into<Value>) -> Self {
        Self { name, requirement: Requirement::Optional(default.into()) }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_required(&self) -> bool {
        matches!(self.requirement, Requirement::Required(_))
    }

    /// The kind this descriptor accepts.
    pub fn kind(&self) -> Kind {
        match &self.requirement {
            Requirement::Required(kind) => *kind,
            Requirement::Optional(default) => default.kind(),
        }
    }
}

/// Arguments bound for the duration of one dispatch call, exposed to the
/// handler by name (fixed shapes) or positionally (variadic shapes).
#[derive(Debug, Clone)]
pub struct Args {
    command: &'static str,
    bound: Map,
    rest: Vec<Value>,
}

impl Args {
    pub(crate) fn fixed(command: &'static str, bound: Map) -> Self {
        Self { command, bound, rest: Vec::new() }
    }

    pub(crate) fn variadic(command: &'static str, rest: Vec<Value>) -> Self {
        Self { command, bound: Map::new(), rest }
    }

    /// The name of the command these arguments were bound for.
    pub fn command(&self) -> &'static str {
        self.command
    }

    /// The unvalidated tail of a variadic command.
    pub fn rest(&self) -> &[Value] {
        &self.rest
    }

    pub fn value(&self, name: &str) -> Result<&Value, CommandError> {
        self.bound.get(name).ok_or_else(|| CommandError::Internal {
            detail: format!("{}: no bound argument '{name}'", self.command),
        })
    }

    pub fn str(&self, name: &str) -> Result<&str, CommandError> {
        self.value(name)?.as_str().map_err(|err| self.internal(name, err))
    }

    pub fn integer(&self, name: &str) -> Result<i64, CommandError> {
        self.value(name)?.as_i64().map_err(|err| self.internal(name, err))
    }

    pub fn object(&self, name: &str) -> Result<&Map, CommandError> {
        self.value(name)?.as_object().map_err(|err| self.internal(name, err))
    }

    // Kind mismatches here mean the binder let a wrong kind through.
    fn internal(&self, name: &str, err: tether_core::TypeMismatch) -> CommandError {
        CommandError::Internal { detail: format!("{}: argument '{name}': {err}", self.command) }
    }
}

/// Bind a request's argument slice against fixed descriptors.
pub fn bind(command: &'static str, specs: &[Arg], elements: &[Value]) -> Result<Args, CommandError> {
    if elements.len() > specs.len() {
        return Err(CommandError::TooManyArguments { command: command.into() });
    }
    let mut bound = Map::new();
    for (i, spec) in specs.iter().enumerate() {
        let value = match (&spec.requirement, elements.get(i)) {
            (Requirement::Required(kind), Some(value)) => {
                if value.kind() != *kind {
                    return Err(CommandError::ArgumentKind {
                        command: command.into(),
                        name: spec.name.into(),
                        expected: *kind,
                    });
                }
                value.clone()
            }
            (Requirement::Required(_), None) => {
                return Err(CommandError::MissingArguments { command: command.into() });
            }
            (Requirement::Optional(default), None) => default.clone(),
            (Requirement::Optional(default), Some(Value::Null)) => default.clone(),
            (Requirement::Optional(default), Some(value)) => {
                if value.kind() != default.kind() {
                    return Err(CommandError::ArgumentKind {
                        command: command.into(),
                        name: spec.name.into(),
                        expected: default.kind(),
                    });
                }
                value.clone()
            }
        };
        bound.insert(spec.name.to_string(), value);
    }
    Ok(Args::fixed(command, bound))
}
