// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the server crate.

use std::path::PathBuf;

use tether_core::Limits;

/// Protocol version sent in the greeting message.
pub const PROTOCOL_VERSION: i64 = 1;

/// Process name for the greeting (default `tether`).
pub fn process_name() -> String {
    std::env::var("TETHER_NAME").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| "tether".into())
}

/// Tracing filter directive (default `info`).
pub fn log_filter() -> String {
    std::env::var("TETHER_LOG").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| "info".into())
}

/// Log destination file. Unset means stderr.
pub fn log_file() -> Option<PathBuf> {
    std::env::var("TETHER_LOG_FILE").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Diagnostic trace tee path. Unset disables the tee.
pub fn trace_file() -> Option<PathBuf> {
    std::env::var("TETHER_TRACE_FILE").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Container nesting ceiling override.
pub fn max_depth() -> Option<usize> {
    std::env::var("TETHER_MAX_DEPTH").ok().and_then(|s| s.parse::<usize>().ok())
}

/// Per-message byte ceiling override.
pub fn max_message_bytes() -> Option<usize> {
    std::env::var("TETHER_MAX_MESSAGE_BYTES").ok().and_then(|s| s.parse::<usize>().ok())
}

/// Codec limits with any environment overrides applied.
pub fn limits() -> Limits {
    let mut limits = Limits::default();
    if let Some(depth) = max_depth() {
        limits = limits.max_depth(depth);
    }
    if let Some(bytes) = max_message_bytes() {
        limits = limits.max_message_bytes(bytes);
    }
    limits
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
