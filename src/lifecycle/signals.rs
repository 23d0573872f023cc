//! OS signal handling.
//!
//! # Responsibilities
//! - Register SIGINT (Ctrl-C) and SIGTERM handlers
//! - Let the caller race the run against them
//!
//! # Design Decisions
//! - Handlers are registered when [`interrupted`] is called, not when the
//!   returned future is first polled, so a signal during startup is kept
//!   rather than killing the process
//! - A handler that cannot be registered never fires; the run continues

use std::future::Future;
use std::io;

/// Register handlers now; the future resolves when the user interrupts.
///
/// Must be called from within a tokio runtime.
pub fn interrupted() -> impl Future<Output = ()> + Send {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let interrupt = registered(signal(SignalKind::interrupt()), "SIGINT");
        let terminate = registered(signal(SignalKind::terminate()), "SIGTERM");

        async move {
            tokio::select! {
                _ = recv(interrupt) => {}
                _ = recv(terminate) => {}
            }
        }
    }

    #[cfg(not(unix))]
    {
        let ctrl_c = registered(tokio::signal::windows::ctrl_c(), "Ctrl-C");

        async move {
            match ctrl_c {
                Some(mut ctrl_c) => {
                    ctrl_c.recv().await;
                }
                None => std::future::pending::<()>().await,
            }
        }
    }
}

fn registered<S>(result: io::Result<S>, name: &str) -> Option<S> {
    match result {
        Ok(stream) => Some(stream),
        Err(e) => {
            // Logging is not set up yet at this point.
            eprintln!("WARNING: Failed to listen for {}: {}", name, e);
            None
        }
    }
}

#[cfg(unix)]
async fn recv(signal: Option<tokio::signal::unix::Signal>) {
    match signal {
        Some(mut signal) => {
            signal.recv().await;
        }
        None => std::future::pending::<()>().await,
    }
}
