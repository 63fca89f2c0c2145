// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command and argument schemas.
//!
//! A [`Command`] is a name plus a shape: fixed argument descriptors with a
//! handler, a variadic handler, or a group of child commands selected by a
//! matcher. Binding a request's argument slice against the descriptors
//! yields a named [`Args`] view or a [`CommandError`]; the same descriptors
//! render the help text.

mod args;
mod command;
pub mod help;

pub use args::{bind, Arg, Args, CommandError};
pub use command::{Command, Handler, Matcher, Shape};
