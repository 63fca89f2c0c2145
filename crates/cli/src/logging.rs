// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing bootstrap for the `tether` binary.
//!
//! Standard output belongs to the protocol, so diagnostics go to stderr
//! by default, or to a log file when one is configured. The returned
//! guard flushes buffered file output on drop; `main()` holds it for the
//! life of the process.

use std::io::IsTerminal;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

use crate::exit_error::ExitError;

pub fn init(filter: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>, ExitError> {
    let directives = EnvFilter::try_new(filter)
        .map_err(|err| ExitError::new(1, format!("invalid log filter '{filter}': {err}")))?;

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|err| {
                    ExitError::new(1, format!("cannot open log file {}: {err}", path.display()))
                })?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(directives)
                .with_writer(writer)
                .with_ansi(false)
                .finish();
            install(subscriber)?;
            Ok(Some(guard))
        }
        None => {
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(directives)
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .finish();
            install(subscriber)?;
            Ok(None)
        }
    }
}

fn install(subscriber: impl tracing::Subscriber + Send + Sync + 'static) -> Result<(), ExitError> {
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| ExitError::new(1, format!("cannot install logger: {err}")))
}
