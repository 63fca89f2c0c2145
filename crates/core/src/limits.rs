// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounds applied to a single message while it is being decoded.
//!
//! Both limits are ceilings on attacker-controlled input: the frame stacks
//! are iterative, so enforcement is a plain counter check, never a stack
//! overflow.

/// Default container nesting ceiling.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default encoded-size ceiling for one message: 8 MiB.
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 8 * 1024 * 1024;

/// Per-message decode bounds. Exceeding either is a fatal decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum container nesting depth.
    pub max_depth: usize,
    /// Maximum encoded size of one message, in bytes.
    pub max_message_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES }
    }
}

impl Limits {
    crate::setters! {
        set {
            max_depth: usize,
            max_message_bytes: usize,
        }
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod tests;
