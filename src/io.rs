// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::env;
use std::ffi::OsString;
use std::io::Write;

use anyhow::Result;

use crate::display::Greeting;
use crate::my_module;

/// The argument vector and environment block a process was started with.
///
/// Nothing in an [Invocation] changes what [run] writes; it is carried
/// through so the entry point accepts the full start triple.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<OsString>,
    envs: Vec<(OsString, OsString)>,
}

impl Invocation {
    /// Creates an [Invocation] from an argument vector and environment.
    pub fn new<A, E>(args: A, envs: E) -> Self
    where
        A: IntoIterator<Item = OsString>,
        E: IntoIterator<Item = (OsString, OsString)>,
    {
        Self {
            args: args.into_iter().collect(),
            envs: envs.into_iter().collect(),
        }
    }

    /// No arguments and an empty environment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Captures the current process. Non-UTF-8 values are kept as is.
    pub fn from_env() -> Self {
        Self::new(env::args_os(), env::vars_os())
    }

    /// The argument count, including the program name when captured with
    /// [Invocation::from_env].
    pub fn argc(&self) -> usize {
        self.args.len()
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    pub fn envs(&self) -> &[(OsString, OsString)] {
        &self.envs
    }
}

/// Writes a blank line and `Hello World!` to `out`, flushes it, then calls
/// [my_module::my_func]. The `invocation` is ignored.
///
/// Errors from `out` are returned as is.
pub fn run<W: Write>(invocation: &Invocation, out: &mut W) -> Result<()> {
    tracing::trace!(argc = invocation.argc(), "writing greeting");

    writeln!(out, "{Greeting}")?;
    out.flush()?;

    my_module::my_func();
    Ok(())
}
