// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tether` - local automation sessions over stdin/stdout.
//!
//! `serve` speaks the framed message protocol; `console` accepts JSON
//! lines for interactive use. Both run the same dispatcher, so a console
//! transcript exercises exactly what a connected peer would.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod exit_error;
mod logging;

use clap::{Parser, Subcommand};

use crate::commands::SessionArgs;
use crate::exit_error::ExitError;

/// Local automation protocol server
#[derive(Parser)]
#[command(name = "tether", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a protocol session on stdin/stdout
    Serve(SessionArgs),
    /// Run a line-oriented console session on stdin/stdout
    Console(SessionArgs),
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        match err.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("{}", exit.message);
                }
                std::process::exit(exit.code);
            }
            None => {
                eprintln!("Error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let args = match &cli.command {
        Command::Serve(args) | Command::Console(args) => args,
    };
    let _guard =
        logging::init(&tether_server::env::log_filter(), args.log_destination().as_deref())?;

    match &cli.command {
        Command::Serve(args) => commands::serve::serve(args),
        Command::Console(args) => commands::console::console(args),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
