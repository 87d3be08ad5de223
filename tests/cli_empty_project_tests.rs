// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::process::Command;

use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;

const EXPECTED: &str = "\nHello World!\n";

#[inline]
fn empty_project() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("empty_project"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments() {
    empty_project()
        .assert()
        .success()
        .code(0)
        .stdout(EXPECTED)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_empty_environment() {
    empty_project()
        .env_clear()
        .assert()
        .success()
        .code(0)
        .stdout(EXPECTED);
}

#[test]
fn test_arguments_ignored() {
    empty_project()
        .arg("foo")
        .arg("bar baz")
        .arg("")
        .assert()
        .success()
        .code(0)
        .stdout(EXPECTED)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_hyphenated_arguments_ignored() {
    for args in [
        vec!["--help"],
        vec!["-h"],
        vec!["--version"],
        vec!["-V"],
        vec!["--", "--help"],
        vec!["-x", "--unknown=1", "value"],
    ] {
        empty_project()
            .args(&args)
            .assert()
            .success()
            .code(0)
            .stdout(EXPECTED)
            .stderr(predicate::str::is_empty());
    }
}

#[test]
fn test_environment_ignored() {
    empty_project()
        .env_clear()
        .env("GREETING", "Goodbye")
        .env("LANG", "C")
        .arg("ignored")
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_arguments_ignored() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    empty_project()
        .arg(OsStr::from_bytes(&[0x66, 0x6f, 0x80, 0xff]))
        .env(OsStr::from_bytes(&[0xfe, 0x41]), OsStr::from_bytes(&[0x80]))
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn test_repeated_runs() {
    let outputs: Vec<Vec<u8>> = (0..3)
        .map(|_| {
            let output = empty_project().output().expect("output");
            assert!(output.status.success());
            assert_eq!(Some(0), output.status.code());
            output.stdout
        })
        .collect();

    for stdout in outputs {
        assert_eq!(EXPECTED.as_bytes(), stdout.as_slice());
    }
}

#[test]
fn test_diagnostics_stay_on_stderr() {
    empty_project()
        .env("RUST_LOG", "trace")
        .arg("--verbose")
        .assert()
        .success()
        .stdout(EXPECTED)
        .stderr(predicate::str::contains("starting"));
}
