// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::fmt::{Display, Formatter, Result};

/// The text of the greeting line.
pub const GREETING: &str = "Hello World!";

/// The program's output: a blank line followed by [GREETING].
///
/// There is no trailing newline, `println!("{}", Greeting)` emits exactly
/// `"\nHello World!\n"`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Greeting;

impl Display for Greeting {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f)?;
        write!(f, "{GREETING}")
    }
}
