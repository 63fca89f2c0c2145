// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tether serve` - Run a protocol session on stdin/stdout

use anyhow::Result;

use crate::commands::SessionArgs;
use crate::exit_error::ExitError;

pub fn serve(args: &SessionArgs) -> Result<()> {
    let config = args.session_config();
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    tether_server::serve(stdin, stdout, config).map_err(|err| ExitError::from(err).into())
}
