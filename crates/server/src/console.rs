// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The line-oriented debug console.
//!
//! A replacement transport for humans: requests are standard JSON arrays
//! typed one per line, and both directions are echoed back out with
//! timestamps (`>>` requests, `<<` replies and warnings). The same
//! dispatcher runs underneath, so replies, warnings, and the escalation
//! rules match the wire protocol exactly. A line that does not parse, or
//! that uses a number with no integer reading, gets an error line and the
//! console moves on.

use std::io::{BufRead, Write};

use tether_core::{from_json, to_json, Value};

use crate::dispatch::{Dispatcher, SessionState};
use crate::error::SessionError;
use crate::protocol;
use crate::session::SessionConfig;
use crate::trace::timestamp;

/// Run a console session until end of input or `exit`.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: SessionConfig,
) -> Result<(), SessionError> {
    let mut dispatcher = Dispatcher::new(&config.name);
    tracing::info!(name = %config.name, "console open");
    emit(&mut output, "<<", &protocol::greeting(&config.name))?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let message = match parse(trimmed) {
            Ok(message) => message,
            Err(err) => {
                writeln!(output, "{} !! {err}", timestamp())?;
                continue;
            }
        };
        emit(&mut output, ">>", &message)?;

        let dispatched = dispatcher.dispatch(&message).map_err(|err| {
            tracing::error!(error = %err, "routing failed on invalid input");
            err
        })?;
        for warning in &dispatched.warnings {
            emit(&mut output, "<<", &warning.envelope())?;
        }
        if let Some(reply) = &dispatched.reply {
            emit(&mut output, "<<", reply)?;
        }
        if dispatcher.state() == SessionState::Done {
            tracing::info!("console ended by exit");
            break;
        }
    }
    Ok(())
}

fn parse(line: &str) -> Result<Value, String> {
    let json = serde_json::from_str::<serde_json::Value>(line).map_err(|err| err.to_string())?;
    from_json(&json).map_err(|err| err.to_string())
}

fn emit<W: Write>(output: &mut W, arrow: &str, message: &Value) -> std::io::Result<()> {
    match serde_json::to_string(&to_json(message)) {
        Ok(rendered) => writeln!(output, "{} {arrow} {rendered}", timestamp()),
        Err(err) => writeln!(output, "{} !! render failed: {err}", timestamp()),
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
