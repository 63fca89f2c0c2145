// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod console;
pub mod serve;

use std::path::PathBuf;

use clap::Args;

use tether_server::env;
use tether_server::SessionConfig;

/// Session flags shared by `serve` and `console`. Every flag falls back
/// to its `TETHER_*` environment variable, then to the built-in default.
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Process name announced in the greeting
    #[arg(long)]
    pub name: Option<String>,

    /// Mirror every inbound and outbound message to this file
    #[arg(long, value_name = "PATH")]
    pub trace_file: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Container nesting ceiling for a single message
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Encoded-size ceiling for a single message, in bytes
    #[arg(long, value_name = "BYTES")]
    pub max_message_bytes: Option<usize>,
}

impl SessionArgs {
    /// Resolve flags against the environment into a session config.
    pub fn session_config(&self) -> SessionConfig {
        let mut limits = env::limits();
        if let Some(depth) = self.max_depth {
            limits = limits.max_depth(depth);
        }
        if let Some(bytes) = self.max_message_bytes {
            limits = limits.max_message_bytes(bytes);
        }

        let mut config = SessionConfig::default()
            .name(self.name.clone().unwrap_or_else(env::process_name))
            .limits(limits);
        if let Some(path) = self.trace_file.clone().or_else(env::trace_file) {
            config = config.trace_file(path);
        }
        config
    }

    /// Log destination; `None` keeps diagnostics on stderr.
    pub fn log_destination(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(env::log_file)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
