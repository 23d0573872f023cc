//! Test doubles shared by unit tests.

use std::io;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;
use url::Url;

use crate::health::probe::{HttpProbe, ProbeFault};

/// HTTP double that answers from a closure of the 1-based call number.
pub struct ScriptedProbe<F> {
    script: F,
    calls: AtomicU32,
    seen: Mutex<Vec<(Url, Instant)>>,
}

impl<F> ScriptedProbe<F>
where
    F: Fn(u32) -> Result<u16, ProbeFault> + Sync,
{
    pub fn new(script: F) -> Self {
        Self {
            script,
            calls: AtomicU32::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.seen.lock().unwrap().iter().map(|(url, _)| url.to_string()).collect()
    }

    pub fn instants(&self) -> Vec<Instant> {
        self.seen.lock().unwrap().iter().map(|(_, at)| *at).collect()
    }
}

impl<F> HttpProbe for ScriptedProbe<F>
where
    F: Fn(u32) -> Result<u16, ProbeFault> + Sync,
{
    async fn get(&self, url: &Url, _timeout: Duration) -> Result<u16, ProbeFault> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.seen.lock().unwrap().push((url.clone(), Instant::now()));
        (self.script)(call)
    }
}

/// HTTP double that answers per URL path, counting calls.
pub fn by_path(statuses: Vec<(&'static str, Result<u16, ProbeFault>)>) -> PathProbe {
    PathProbe {
        statuses,
        calls: AtomicU32::new(0),
    }
}

pub struct PathProbe {
    statuses: Vec<(&'static str, Result<u16, ProbeFault>)>,
    calls: AtomicU32,
}

impl PathProbe {
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HttpProbe for PathProbe {
    async fn get(&self, url: &Url, _timeout: Duration) -> Result<u16, ProbeFault> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.statuses
            .iter()
            .find(|(path, _)| *path == url.path())
            .map(|(_, outcome)| outcome.clone())
            .unwrap_or(Err(ProbeFault::Connect("no route".to_string())))
    }
}

/// Shared in-memory sink for captured log lines.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Install a subscriber on the current thread that writes here.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
