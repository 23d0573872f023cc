//! Endpoint health monitor (v1)
//!
//! Loads the configuration, sets up file logging, checks every endpoint
//! once and prints a summary.
//!
//! # Exit Codes
//! - 0: the run completed (whatever the endpoint outcomes) or was interrupted
//! - 1: configuration could not be loaded, had no endpoints, or logging or
//!   the HTTP client could not be initialized

use std::io;
use std::process::ExitCode;

use clap::Parser;

use endpoint_monitor::lifecycle::{self, signals, startup, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Registered before anything else so an early Ctrl-C still exits cleanly.
    let interrupt = signals::interrupted();

    let cli = Cli::parse();
    let root = startup::project_root();

    lifecycle::run(cli, &root, interrupt, &mut io::stdout())
        .await
        .into()
}
