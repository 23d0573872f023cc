//! One process run, from CLI arguments to exit code.
//!
//! # Responsibilities
//! - Load configuration and build logging (fatal on failure)
//! - Build the HTTP client and run every check
//! - Race the run against the interrupt future
//! - Map the result to a [`RunOutcome`]

use std::fmt;
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::instrument::WithSubscriber;

use crate::config::MonitorConfig;
use crate::health::{CheckPolicy, EndpointChecker, ReqwestProbe};
use crate::lifecycle::startup::{self, ConfigOrigin};
use crate::observability::logging;
use crate::report::RunReporter;

#[derive(Debug, Parser)]
#[command(name = "endpoint-monitor")]
#[command(about = "Check endpoint availability and log the results", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file [default: <project root>/config/config.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the run summary as JSON after the checks
    #[arg(long)]
    pub json: bool,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every endpoint was processed, whatever the verdicts.
    Completed,
    Interrupted,
    /// Configuration, logging or client setup failed, or there was
    /// nothing to check.
    Failed,
}

impl RunOutcome {
    pub fn code(self) -> u8 {
        match self {
            RunOutcome::Completed | RunOutcome::Interrupted => 0,
            RunOutcome::Failed => 1,
        }
    }
}

impl From<RunOutcome> for ExitCode {
    fn from(outcome: RunOutcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

/// Run the monitor once.
///
/// Relative paths resolve against `root`. Human-readable output goes to
/// `console`. If `interrupt` resolves before the checks finish, the run is
/// abandoned.
pub async fn run<F, W>(cli: Cli, root: &Path, interrupt: F, console: &mut W) -> RunOutcome
where
    F: Future<Output = ()>,
    W: Write,
{
    let (config, origin) = match startup::load_startup_config(cli.config.as_deref(), root) {
        Ok(loaded) => loaded,
        Err(e) => {
            say(console, format_args!("ERROR: Could not load configuration: {}", e));
            return RunOutcome::Failed;
        }
    };

    match &origin {
        ConfigOrigin::File(path) => say(
            console,
            format_args!("Loaded configuration from {}", path.display()),
        ),
        ConfigOrigin::Fallback => say(
            console,
            format_args!("INFO: No config file found, using the fallback configuration."),
        ),
    }

    // Flushes buffered log lines when dropped at the end of the run.
    let (dispatch, _log_guard) = match logging::build_logging(&config.logging, root) {
        Ok(built) => built,
        Err(e) => {
            say(console, format_args!("ERROR: Failed to set up logging: {}", e));
            return RunOutcome::Failed;
        }
    };
    say(
        console,
        format_args!(
            "Logging configured: {} at {} level",
            logging::resolve_log_path(root, &config.logging.file).display(),
            config.logging.level.to_ascii_uppercase()
        ),
    );

    run_checks(&cli, &config, &origin, interrupt, console)
        .with_subscriber(dispatch)
        .await
}

async fn run_checks<F, W>(
    cli: &Cli,
    config: &MonitorConfig,
    origin: &ConfigOrigin,
    interrupt: F,
    console: &mut W,
) -> RunOutcome
where
    F: Future<Output = ()>,
    W: Write,
{
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Health Monitor starting");
    if let ConfigOrigin::File(path) = origin {
        tracing::info!(path = %path.display(), "Configuration loaded");
    }

    let probe = match ReqwestProbe::new() {
        Ok(probe) => probe,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            say(console, format_args!("ERROR: Failed to build HTTP client: {}", e));
            return RunOutcome::Failed;
        }
    };

    let policy = CheckPolicy::from(&config.monitor);
    let mut reporter = RunReporter::new(EndpointChecker::new(probe), &mut *console);

    let outcome = tokio::select! {
        outcome = reporter.run(&config.endpoints, &policy) => Some(outcome),
        _ = interrupt => None,
    };
    let console = reporter.into_console();

    match outcome {
        None => {
            tracing::info!("Health Monitor interrupted by user");
            say(console, format_args!(""));
            say(console, format_args!("Interrupted by user"));
            RunOutcome::Interrupted
        }
        // Already reported by the run.
        Some(Err(_)) => RunOutcome::Failed,
        Some(Ok(summary)) => {
            if cli.json {
                match serde_json::to_string_pretty(&summary) {
                    Ok(json) => say(console, format_args!("{}", json)),
                    Err(e) => tracing::error!(error = %e, "Failed to serialize summary"),
                }
            }

            say(console, format_args!("Health checks completed"));
            tracing::info!("Health Monitor completed");
            RunOutcome::Completed
        }
    }
}

fn say<W: Write>(console: &mut W, line: fmt::Arguments<'_>) {
    // Nowhere left to report a broken console.
    let _ = writeln!(console, "{}", line);
}
