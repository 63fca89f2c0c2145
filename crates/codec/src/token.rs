// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token events exchanged between the byte layer and the codec.

use crate::error::ScanError;

/// Control symbol bytes. LF frames messages; the rest are structural.
pub mod symbol {
    pub const END_OF_MESSAGE: u8 = b'\n';
    pub const ARRAY_OPEN: u8 = b'[';
    pub const OBJECT_OPEN: u8 = b'{';
    pub const ARRAY_CLOSE: u8 = b']';
    pub const OBJECT_CLOSE: u8 = b'}';
    pub const TRUE: u8 = b'Y';
    pub const FALSE: u8 = b'N';
    pub const NULL: u8 = b'U';
}

/// One event from the byte scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A fragment of string data; more follows before the string is whole.
    ChunkPart(String),
    /// The final fragment of a string token. The complete string is every
    /// preceding `ChunkPart` plus this, concatenated.
    Chunk(String),
    /// One control byte, delivered raw. Recognition is the decoder's job.
    Symbol(u8),
    /// A complete number token.
    Integer(i64),
    /// The source is out of bytes; refill it and ask again.
    EndOfInput,
    /// The byte layer hit malformed input.
    FormatError(ScanError),
}

tether_core::simple_display! {
    Token {
        ChunkPart(..) => "chunk part",
        Chunk(..) => "string",
        Symbol(..) => "control symbol",
        Integer(..) => "integer",
        EndOfInput => "end of input",
        FormatError(..) => "format error",
    }
}

/// Bytes skipped between tokens. LF is never whitespace here; it is the
/// end-of-message symbol.
#[inline]
pub fn is_interstitial(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r')
}

/// Bytes that start a number token.
#[inline]
pub fn starts_number(byte: u8) -> bool {
    byte == b'-' || byte.is_ascii_digit()
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
