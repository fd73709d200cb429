// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use stack_smash::{Outcome, copier, read_input};
use tracing::{debug, info};

mod args;
mod session;
mod util;

/// Read stdin once and hand it to the copier. Exits with success whenever the
/// output line was printed (or nothing was read); an overflow may instead take
/// the process down before that.
fn main() -> ExitCode {
    let args = args::Args::parse();
    args::check_is_valid(&args);
    if let Err(error) = session::init_logger(&args).and_then(|()| run(&args)) {
        debug!(?error, "main_failure");
        util::error(&format!("{error:#}"));
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(args: &args::Args) -> Result<()> {
    let input = read_input(&mut io::stdin().lock());
    if input.is_empty() {
        debug!("no input, skipping");
        return Ok(());
    }
    info!(len = input.len(), checked = args.checked, "processing input");

    let outcome = if args.checked {
        copier::process_checked(input.as_bytes()).context("refusing to copy input")?
    } else {
        // SAFETY: none. Input of ten bytes or more overflows the copier's stack
        // buffer; that overflow is what this program exists to show.
        unsafe { copier::process(input.as_bytes()) }
    };
    debug!(found = matches!(outcome, Outcome::Secret), "processed");

    let mut stdout = io::stdout().lock();
    outcome.write_to(&mut stdout).context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
