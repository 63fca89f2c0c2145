// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Incremental byte scanner: raw input in, [`Token`] events out.
//!
//! The scanner never blocks and never looks ahead across a refill: when the
//! buffered input runs out mid-string it emits what it has as a
//! [`Token::ChunkPart`] (held back to a whole-character boundary) and then
//! [`Token::EndOfInput`]; a partial number is kept internal until its
//! terminating byte arrives. After a [`Token::FormatError`] the scanner
//! state is unspecified; the session is over at that point.

use tether_core::Limits;

use crate::error::ScanError;
use crate::token::{is_interstitial, starts_number, symbol, Token};

enum Escape {
    None,
    /// A backslash has been read; the selector byte is next.
    Started,
    /// Inside `\uXXXX`, collecting hex digits.
    Unicode { hex: String },
}

enum State {
    Idle,
    InString { content: Vec<u8>, esc: Escape },
    InNumber { text: String },
}

pub struct Scanner {
    buf: Vec<u8>,
    pos: usize,
    state: State,
    /// Bytes consumed since the last end-of-message symbol.
    message_bytes: usize,
    limits: Limits,
}

impl Scanner {
    pub fn new(limits: Limits) -> Self {
        Self { buf: Vec::new(), pos: 0, state: State::Idle, message_bytes: 0, limits }
    }

    /// Append raw input. Already-consumed bytes are compacted away first.
    pub fn push(&mut self, bytes: &[u8]) {
        if self.pos > 0 {
            self.buf.drain(..self.pos);
            self.pos = 0;
        }
        self.buf.extend_from_slice(bytes);
    }

    /// Unconsumed bytes currently buffered.
    pub fn buffered(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True when no token is mid-flight and no input waits. Lets a
    /// transport tell a clean end of stream from a truncated message.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle) && self.buffered() == 0
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            let token = if matches!(self.state, State::Idle) {
                self.scan_idle()
            } else if matches!(self.state, State::InString { .. }) {
                self.scan_string()
            } else {
                self.scan_number()
            };
            if let Some(token) = token {
                return token;
            }
        }
    }

    fn scan_idle(&mut self) -> Option<Token> {
        loop {
            let Some(byte) = self.peek() else {
                return Some(Token::EndOfInput);
            };
            self.advance();
            if self.over_limit() {
                return Some(self.too_long());
            }
            if is_interstitial(byte) {
                continue;
            }
            if starts_number(byte) {
                self.state = State::InNumber { text: (byte as char).to_string() };
                return None;
            }
            if byte == b'"' {
                self.state = State::InString { content: Vec::new(), esc: Escape::None };
                return None;
            }
            if byte == symbol::END_OF_MESSAGE {
                self.message_bytes = 0;
            }
            return Some(Token::Symbol(byte));
        }
    }

    fn scan_number(&mut self) -> Option<Token> {
        let mut text = match std::mem::replace(&mut self.state, State::Idle) {
            State::InNumber { text } => text,
            other => {
                self.state = other;
                return None;
            }
        };
        loop {
            match self.peek() {
                None => {
                    self.state = State::InNumber { text };
                    return Some(Token::EndOfInput);
                }
                Some(byte) if byte.is_ascii_digit() => {
                    self.advance();
                    if self.over_limit() {
                        return Some(self.too_long());
                    }
                    text.push(byte as char);
                }
                // The terminating byte stays unconsumed for the next token.
                Some(_) => {
                    if text == "-" {
                        return Some(Token::FormatError(ScanError::DanglingMinus));
                    }
                    return Some(match text.parse::<i64>() {
                        Ok(n) => Token::Integer(n),
                        Err(_) => Token::FormatError(ScanError::IntegerOverflow { text }),
                    });
                }
            }
        }
    }

    fn scan_string(&mut self) -> Option<Token> {
        let (mut content, mut esc) = match std::mem::replace(&mut self.state, State::Idle) {
            State::InString { content, esc } => (content, esc),
            other => {
                self.state = other;
                return None;
            }
        };
        loop {
            let Some(byte) = self.peek() else {
                return Some(match drain_partial(&mut content) {
                    Err(err) => Token::FormatError(err),
                    Ok(part) => {
                        self.state = State::InString { content, esc };
                        if part.is_empty() {
                            Token::EndOfInput
                        } else {
                            Token::ChunkPart(part)
                        }
                    }
                });
            };
            self.advance();
            if self.over_limit() {
                return Some(self.too_long());
            }
            match std::mem::replace(&mut esc, Escape::None) {
                Escape::Started => match byte {
                    b'"' => content.push(b'"'),
                    b'\\' => content.push(b'\\'),
                    b'n' => content.push(b'\n'),
                    b't' => content.push(b'\t'),
                    b'r' => content.push(b'\r'),
                    b'u' => esc = Escape::Unicode { hex: String::new() },
                    other => {
                        return Some(Token::FormatError(ScanError::UnknownEscape {
                            ch: other as char,
                        }))
                    }
                },
                Escape::Unicode { mut hex } => {
                    if !byte.is_ascii_hexdigit() {
                        hex.push(byte as char);
                        return Some(Token::FormatError(ScanError::BadUnicodeEscape { text: hex }));
                    }
                    hex.push(byte as char);
                    if hex.len() < 4 {
                        esc = Escape::Unicode { hex };
                    } else {
                        match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                            Some(c) => {
                                let mut utf8 = [0u8; 4];
                                content.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
                            }
                            None => {
                                return Some(Token::FormatError(ScanError::BadUnicodeEscape {
                                    text: hex,
                                }))
                            }
                        }
                    }
                }
                Escape::None => match byte {
                    b'"' => {
                        return Some(match String::from_utf8(content) {
                            Ok(text) => Token::Chunk(text),
                            Err(_) => Token::FormatError(ScanError::InvalidUtf8),
                        });
                    }
                    b'\\' => esc = Escape::Started,
                    byte if byte < 0x20 => {
                        return Some(Token::FormatError(ScanError::ControlByteInString { byte }))
                    }
                    other => content.push(other),
                },
            }
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
        self.message_bytes += 1;
    }

    #[inline]
    fn over_limit(&self) -> bool {
        self.message_bytes > self.limits.max_message_bytes
    }

    fn too_long(&self) -> Token {
        Token::FormatError(ScanError::MessageTooLong { limit: self.limits.max_message_bytes })
    }
}

/// Emit the longest complete-UTF-8 prefix of `content`, holding back the
/// tail bytes of a character split across refills.
fn drain_partial(content: &mut Vec<u8>) -> Result<String, ScanError> {
    match std::str::from_utf8(content) {
        Ok(text) => {
            let out = text.to_string();
            content.clear();
            Ok(out)
        }
        Err(err) => {
            if err.error_len().is_some() {
                return Err(ScanError::InvalidUtf8);
            }
            let tail = content.split_off(err.valid_up_to());
            match String::from_utf8(std::mem::replace(content, tail)) {
                Ok(out) => Ok(out),
                Err(_) => Err(ScanError::InvalidUtf8),
            }
        }
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
