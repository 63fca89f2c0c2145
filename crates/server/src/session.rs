// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The session loop.
//!
//! One session owns one byte channel: write the greeting, then read one
//! message, dispatch it, write any warnings and the reply, and repeat
//! until the peer closes the channel or `exit` runs. Replies always carry
//! the dispatch outcome of the request they answer; nothing is read ahead
//! while a handler runs.

use std::io::{Read, Write};
use std::path::PathBuf;

use tether_core::{Limits, Value};

use crate::dispatch::{Dispatcher, SessionState};
use crate::error::SessionError;
use crate::protocol;
use crate::trace::Trace;
use crate::transport::{Channel, Received};

/// Everything a session needs beyond the byte channel itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Name announced in the greeting and by `version`.
    pub name: String,
    /// Per-message decode bounds.
    pub limits: Limits,
    /// Diagnostic tee destination; `None` disables the tee.
    pub trace_file: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { name: "tether".into(), limits: Limits::default(), trace_file: None }
    }
}

impl SessionConfig {
    tether_core::setters! {
        into { name: String }
        set { limits: Limits }
        option { trace_file: PathBuf }
    }
}

/// Run one full session over `reader`/`writer`. Returns when the peer
/// closes the channel or `exit` runs; every other way out is a
/// [`SessionError`] the caller turns into a process exit code.
pub fn serve<R: Read, W: Write>(
    reader: R,
    writer: W,
    config: SessionConfig,
) -> Result<(), SessionError> {
    let mut channel = Channel::new(reader, writer, config.limits);
    let mut trace = match &config.trace_file {
        Some(path) => Some(Trace::create(path)?),
        None => None,
    };
    let mut dispatcher = Dispatcher::new(&config.name);

    tracing::info!(name = %config.name, "session open");
    send(&mut channel, &mut trace, &dispatcher, &protocol::greeting(&config.name))?;

    loop {
        let message = match channel.receive()? {
            Received::Message(message) => message,
            Received::Eof => {
                tracing::info!("peer closed the channel");
                break;
            }
        };
        if let Some(trace) = trace.as_mut() {
            trace.inbound(&message, dispatcher.context());
        }

        let dispatched = dispatcher.dispatch(&message).map_err(|err| {
            tracing::error!(error = %err, "routing failed on invalid input");
            err
        })?;
        for warning in &dispatched.warnings {
            send(&mut channel, &mut trace, &dispatcher, &warning.envelope())?;
        }
        if let Some(reply) = &dispatched.reply {
            send(&mut channel, &mut trace, &dispatcher, reply)?;
        }
        if dispatcher.state() == SessionState::Done {
            tracing::info!("session ended by exit");
            break;
        }
    }
    Ok(())
}

fn send<R: Read, W: Write>(
    channel: &mut Channel<R, W>,
    trace: &mut Option<Trace>,
    dispatcher: &Dispatcher,
    message: &Value,
) -> Result<(), SessionError> {
    if let Some(trace) = trace.as_mut() {
        trace.outbound(message, dispatcher.context());
    }
    channel.send(message)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
