// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Command line interface. Every option is optional; without any the program
//! reads stdin and runs the unchecked copy.

use clap::error::{Error, ErrorKind};
use std::str::FromStr;
use tracing_subscriber::filter::Directive;

/// Trait used to perform extra validation after parsing.
pub trait ValidateArgs {
    /// Perform post-parsing validation but do not abort.
    fn validate(&self) -> Result<(), Error>;
}

/// Validate a set of arguments and ensure they are in a valid state.
/// This method will abort execution with a user friendly error message if the state is invalid.
pub fn check_is_valid<T>(command: &T)
where
    T: clap::Parser + ValidateArgs,
{
    if let Err(error) = command.validate() {
        error.format(&mut T::command()).exit()
    }
}

#[derive(Debug, clap::Parser)]
#[command(
    version,
    name = "stack-smash",
    about = "Read up to 100 bytes from stdin and copy them into a 10-byte stack buffer"
)]
pub struct Args {
    /// Extra tracing directive applied on top of STACK_SMASH_LOG, e.g. `debug` or
    /// `stack_smash=trace`
    #[arg(long, value_name = "DIRECTIVE")]
    pub log_level: Option<String>,
    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
    /// Use the bounds-checked copy and fail on input that does not fit
    #[arg(long)]
    pub checked: bool,
}

impl Args {
    /// The parsed `--log-level` directive, if any. Only call after validation.
    pub fn log_directive(&self) -> Option<Directive> {
        self.log_level.as_deref().and_then(|level| Directive::from_str(level).ok())
    }
}

impl ValidateArgs for Args {
    fn validate(&self) -> Result<(), Error> {
        if let Some(level) = &self.log_level
            && let Err(err) = Directive::from_str(level)
        {
            return Err(Error::raw(
                ErrorKind::InvalidValue,
                format!("Invalid value `{level}` for `--log-level`: {err}\n"),
            ));
        }
        Ok(())
    }
}
