// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io;

use anyhow::Result;
use clap::Parser;

use empty_project::cli::App;
use empty_project::io::{run, Invocation};
use empty_project::logging;

fn main() -> Result<()> {
    let app = App::parse();
    logging::init_cli_logger();

    let invocation = Invocation::from_env();
    tracing::debug!(
        argc = invocation.argc(),
        envc = invocation.envs().len(),
        ignored = app.args().len(),
        "starting"
    );

    let mut stdout = io::stdout().lock();
    run(&invocation, &mut stdout)?;

    tracing::debug!("done");
    Ok(())
}
