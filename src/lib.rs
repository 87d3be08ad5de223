// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Empty Project
//!
//! A two-unit program used to check that a toolchain can compile and link
//! a binary against a separately built library. The `empty_project` binary
//! prints a blank line, prints `Hello World!`, and calls [my_module::my_func],
//! which lives in this library crate and does nothing.
//!
//! # Quick Start
//!
//! Running the greeting against any writer:
//!
//! ```
//! use empty_project::io::{run, Invocation};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut out = Vec::new();
//!     run(&Invocation::empty(), &mut out)?;
//!     assert_eq!(out, b"\nHello World!\n");
//!     Ok(())
//! }
//! ```
//!
//! # Output
//!
//! | Line | Content        |
//! |------|----------------|
//! | 1    | (empty)        |
//! | 2    | `Hello World!` |
//!
//! Arguments and environment are accepted and ignored. The exit status is
//! always `0`.

pub mod cli;
pub mod display;
pub mod io;
pub mod logging;
pub mod my_module;
