// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic trace tee.
//!
//! When enabled, every message crossing the channel is appended to a file
//! as a timestamped, pretty-printed JSON rendering: `<-` for inbound, `->`
//! for outbound, with the session context bracketed after the timestamp
//! once `set_context` has run. The tee is observation only; a failing
//! trace write is logged and never surfaces to the session.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tether_core::{to_json, Value};

/// Wall-clock timestamp with millisecond precision, RFC 3339.
pub(crate) fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

pub struct Trace {
    out: BufWriter<File>,
}

impl Trace {
    /// Create or truncate the trace file.
    pub fn create(path: &Path) -> std::io::Result<Self> {
        Ok(Self { out: BufWriter::new(File::create(path)?) })
    }

    /// Record one message read from the peer.
    pub fn inbound(&mut self, message: &Value, context: Option<&str>) {
        self.line("<-", message, context);
    }

    /// Record one message written to the peer.
    pub fn outbound(&mut self, message: &Value, context: Option<&str>) {
        self.line("->", message, context);
    }

    // Flushed per line so the file is tailable mid-session.
    fn line(&mut self, arrow: &str, message: &Value, context: Option<&str>) {
        let rendered = match serde_json::to_string_pretty(&to_json(message)) {
            Ok(rendered) => rendered,
            Err(err) => {
                tracing::warn!(error = %err, "trace render failed");
                return;
            }
        };
        let stamp = timestamp();
        let written = match context {
            Some(context) => writeln!(self.out, "{stamp} [{context}] {arrow} {rendered}"),
            None => writeln!(self.out, "{stamp} {arrow} {rendered}"),
        };
        if let Err(err) = written.and_then(|()| self.out.flush()) {
            tracing::warn!(error = %err, "trace write failed");
        }
    }
}

#[cfg(test)]
#[path = "trace_tests.rs"]
mod tests;
