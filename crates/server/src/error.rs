// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session-fatal error conditions and their process exit codes.
//!
//! Most failures are message-local: a leaf handler rejects its input and the
//! session answers `[false, ...]` and keeps going. The conditions here are the
//! ones that end the session instead. Each maps to a stable exit code so a
//! supervising process can tell a framing bug (`21..=28`) from a routing bug
//! (`2`) from a broken pipe (`1`).

use thiserror::Error;

use crate::dispatch::WalkError;
use tether_codec::DecodeError;

/// Exit code offset for decode failures: code `n` exits with `20 + n`.
pub const DECODE_EXIT_BASE: i32 = 20;

/// Exit code for invalid input caught while routing group structure.
pub const INVALID_INPUT_EXIT: i32 = 2;

/// Exit code for channel I/O failures.
pub const IO_EXIT: i32 = 1;

/// A condition that terminates the session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The inbound byte stream violated the wire grammar.
    #[error("fatal decode error: {source}")]
    Decode {
        #[from]
        source: DecodeError,
    },

    /// The dispatcher ran out of message elements while walking a group.
    #[error("invalid input: {source}")]
    InvalidInput {
        #[from]
        source: WalkError,
    },

    /// Reading or writing the channel failed.
    #[error("channel i/o failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SessionError {
    /// The process exit code a server should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Decode { source } => DECODE_EXIT_BASE + i32::from(source.code()),
            Self::InvalidInput { .. } => INVALID_INPUT_EXIT,
            Self::Io { .. } => IO_EXIT,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
