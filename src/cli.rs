// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::ffi::OsString;

use clap::Parser;

/// Prints a blank line and a greeting.
///
/// Every argument is accepted and ignored. `--help` and `--version` are
/// disabled so no input changes the output or exit status.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"))]
#[command(about, long_about = None, disable_help_flag = true, disable_version_flag = true)]
pub struct App {
    /// ignored
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

impl App {
    /// The arguments that were passed, minus the program name and a
    /// leading `--`.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}
