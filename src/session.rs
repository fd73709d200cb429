// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logger setup for a single run.

use crate::args::Args;
use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

/// Environment variable used to control this session log tracing.
const LOG_ENV_VAR: &str = "STACK_SMASH_LOG";

/// Initialize the logger using the STACK_SMASH_LOG environment variable and the
/// --log-level argument. Logs always go to stderr; stdout carries the program output.
pub fn init_logger(args: &Args) -> Result<()> {
    let filter = EnvFilter::from_env(LOG_ENV_VAR);
    let filter = if let Some(directive) = args.log_directive() {
        filter.add_directive(directive)
    } else {
        filter
    };

    if args.log_json { json_logs(filter) } else { text_logs(filter) }
}

/// Configure global logger to use a json logger.
fn json_logs(filter: EnvFilter) -> Result<()> {
    use tracing_subscriber::fmt::layer;
    let subscriber =
        Registry::default().with(filter).with(layer().json().with_writer(std::io::stderr));
    set_global(subscriber)
}

/// Configure global logger to use the compact text formatter.
fn text_logs(filter: EnvFilter) -> Result<()> {
    use tracing_subscriber::fmt::layer;
    let use_colors = console::colors_enabled_stderr();
    let subscriber = Registry::default().with(filter).with(
        layer().compact().with_writer(std::io::stderr).with_ansi(use_colors).with_target(true),
    );
    set_global(subscriber)
}

fn set_global<S>(subscriber: S) -> Result<()>
where
    S: tracing::Subscriber + Send + Sync + 'static,
{
    tracing::subscriber::set_global_default(subscriber).context("failed to install the logger")
}
