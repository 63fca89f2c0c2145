// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tether-codec: resumable message framing.
//!
//! Messages are trees of [`tether_core::Value`] carried as a byte stream:
//!
//! - strings: `"`-quoted, escapes `\"` `\\` `\n` `\t` `\r` and `\uXXXX`
//!   for other control characters
//! - integers: optional `-` then decimal digits; a single space separates
//!   two adjacent integers
//! - control symbols: `[` `{` `]` `}` array/object brackets, `Y` true,
//!   `N` false, `U` null, and LF terminating a message
//! - space, tab, and CR between tokens are ignored
//!
//! Both directions are incremental. The [`Scanner`] turns bytes into
//! [`Token`] events and may pause mid-string (chunk parts) or mid-number
//! when input runs out; the [`Decoder`] assembles tokens into values on an
//! explicit frame stack and suspends across refills. The [`Encoder`] walks
//! a value with the mirror frame stack, emitting through a bounded-buffer
//! [`TokenWriter`]; a message may span any number of output buffers and
//! the flushed byte stream is identical for every buffer capacity.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod scanner;
pub mod token;
pub mod writer;

pub use decoder::{Decode, Decoder};
pub use encoder::{EncodeStatus, Encoder};
pub use error::{DecodeError, ScanError};
pub use scanner::Scanner;
pub use token::{symbol, Token};
pub use writer::{TokenWriter, WriteStatus};

#[cfg(test)]
mod test_util;
