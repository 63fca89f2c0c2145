// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scan and decode failures, with the stable error codes the process exit
//! status is built from.

use thiserror::Error;

use tether_core::Kind;

/// Malformed input detected by the byte scanner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Escapes are limited to `\"` `\\` `\n` `\t` `\r` `\uXXXX`.
    #[error("unknown escape sequence '\\{ch}'")]
    UnknownEscape { ch: char },

    /// `\u` escape with bad hex digits or a non-scalar code point.
    #[error("bad unicode escape '\\u{text}'")]
    BadUnicodeEscape { text: String },

    /// A raw control byte (LF included) appeared inside an open string.
    #[error("raw control byte 0x{byte:02x} inside a string")]
    ControlByteInString { byte: u8 },

    /// String content must be UTF-8.
    #[error("string content is not valid UTF-8")]
    InvalidUtf8,

    /// Number token does not fit in an i64.
    #[error("number out of range: {text}")]
    IntegerOverflow { text: String },

    /// A `-` with no digits after it.
    #[error("dangling minus sign")]
    DanglingMinus,

    /// The per-message byte ceiling was crossed mid-message.
    #[error("message exceeds {limit} bytes")]
    MessageTooLong { limit: usize },
}

/// Fatal decode failure. Every variant terminates the session; [`code`]
/// gives the stable protocol error code and the owning process exits with
/// `20 + code`.
///
/// [`code`]: DecodeError::code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The byte layer delivered malformed input (code 1).
    #[error("bad token stream: {source}")]
    BadTokenStream { source: ScanError },

    /// A chunk part was followed by something other than more string data
    /// (code 2).
    #[error("expected string continuation, got {got}")]
    ChunkContinuationExpected { got: &'static str },

    /// End-of-message arrived while nested, or with nothing decoded
    /// (code 3).
    #[error("unexpected end of message")]
    UnexpectedEndOfMessage,

    /// More input after the message root was already complete (code 4).
    #[error("trailing input past end of message")]
    TrailingInput,

    /// Object keys must be strings (code 5).
    #[error("object key must be a string, got {got}")]
    NonStringKey { got: Kind },

    /// A closing bracket of the wrong kind, or with no container open
    /// (code 6).
    #[error("mismatched closing bracket '{got}'")]
    MismatchedBracket { got: char },

    /// An object closed while a key was still waiting for its value
    /// (code 6).
    #[error("object closed with a dangling key")]
    DanglingKey,

    /// A control byte outside the recognized set (code 7).
    #[error("unknown control symbol 0x{byte:02x}")]
    UnknownSymbol { byte: u8 },

    /// The per-message byte ceiling was crossed (code 8).
    #[error("message exceeds {limit} bytes")]
    MessageTooLong { limit: usize },

    /// The nesting ceiling was crossed (code 8; resource limits share the
    /// message-too-long code).
    #[error("nesting exceeds {limit} levels")]
    DepthExceeded { limit: usize },
}

impl DecodeError {
    /// Stable protocol error code, `1..=8`.
    pub fn code(&self) -> u8 {
        match self {
            Self::BadTokenStream { .. } => 1,
            Self::ChunkContinuationExpected { .. } => 2,
            Self::UnexpectedEndOfMessage => 3,
            Self::TrailingInput => 4,
            Self::NonStringKey { .. } => 5,
            Self::MismatchedBracket { .. } | Self::DanglingKey => 6,
            Self::UnknownSymbol { .. } => 7,
            Self::MessageTooLong { .. } | Self::DepthExceeded { .. } => 8,
        }
    }

    /// Scan errors mostly map to code 1; the size ceiling keeps its own
    /// code so the exit status stays meaningful.
    pub fn from_scan(err: ScanError) -> Self {
        match err {
            ScanError::MessageTooLong { limit } => Self::MessageTooLong { limit },
            other => Self::BadTokenStream { source: other },
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
