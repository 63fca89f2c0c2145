// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tether-server: the command-dispatch runtime behind a protocol session.
//!
//! A session is strictly synchronous request-then-reply: the transport
//! decodes one message, the dispatcher routes it through the command table
//! (schema-validated leaf handlers, nested groups, an object-handle
//! registry), and the reply goes back out before the next read. Schema and
//! domain failures are caught per message; decode errors and invalid input
//! during the dispatcher's own group walk end the session with a distinct
//! exit code.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod console;
pub mod dispatch;
pub mod env;
pub mod error;
pub mod objects;
pub mod protocol;
pub mod registry;
pub mod schema;
pub mod session;
pub mod trace;
pub mod transport;

#[cfg(test)]
mod test_fixtures;

pub use dispatch::{Dispatched, Dispatcher, Invocation, SessionState, WalkError};
pub use error::SessionError;
pub use protocol::Warning;
pub use registry::{AutomationObject, Registry, WarnSink};
pub use schema::{Arg, Args, Command, CommandError, Matcher, Shape};
pub use session::{serve, SessionConfig};
pub use transport::{Channel, Received};
