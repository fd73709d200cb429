// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostic output. Diagnostics go to stderr so they never mix with the
//! echoed line on stdout.

/// Print an error message to stderr, behind a bold red "error:" tag. Styling is
/// dropped when stderr is not a terminal.
pub fn error(msg: &str) {
    let error = console::style("error:").bold().red().for_stderr();
    let msg_fmt = console::style(msg).bold().for_stderr();
    eprintln!("{error} {msg_fmt}")
}
