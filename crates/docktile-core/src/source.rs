use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::BoxFuture;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::FetchError;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Supplies a full snapshot of records on every call. No paging, no streaming.
pub trait DataSource<R>: Send + Sync {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<R>, FetchError>>;
}

/// Bounds a single fetch: it fails with `Cancelled` once the token fires and
/// with `Timeout` once the deadline passes, whichever comes first.
#[derive(Debug, Clone)]
pub struct FetchContext {
    pub cancel: CancellationToken,
    pub timeout: Duration,
}

impl Default for FetchContext {
    fn default() -> Self {
        Self { cancel: CancellationToken::new(), timeout: DEFAULT_FETCH_TIMEOUT }
    }
}

impl FetchContext {
    pub fn new(cancel: CancellationToken, timeout: Duration) -> Self {
        Self { cancel, timeout }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout, ..Self::default() }
    }

    pub async fn run<T, F>(&self, fut: F) -> Result<T, FetchError>
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        if self.cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }
        tokio::select! {
            _ = self.cancel.cancelled() => {
                debug!("fetch cancelled");
                Err(FetchError::Cancelled)
            }
            result = tokio::time::timeout(self.timeout, fut) => match result {
                Ok(inner) => inner,
                Err(_) => Err(FetchError::Timeout(self.timeout)),
            },
        }
    }
}

/// In-memory source. Tests and demo mode swap its contents between fetches.
pub struct StaticSource<R> {
    state: Mutex<StaticState<R>>,
}

struct StaticState<R> {
    records: Vec<R>,
    failure: Option<FetchError>,
    delay: Option<Duration>,
}

impl<R: Clone + Send + Sync> StaticSource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { state: Mutex::new(StaticState { records, failure: None, delay: None }) }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn shared(records: Vec<R>) -> Arc<Self> {
        Arc::new(Self::new(records))
    }

    pub fn set_records(&self, records: Vec<R>) {
        if let Ok(mut state) = self.state.lock() {
            state.records = records;
        }
    }

    /// Every fetch fails with `err` until cleared with `None`.
    pub fn set_failure(&self, err: Option<FetchError>) {
        if let Ok(mut state) = self.state.lock() {
            state.failure = err;
        }
    }

    pub fn set_delay(&self, delay: Option<Duration>) {
        if let Ok(mut state) = self.state.lock() {
            state.delay = delay;
        }
    }

    fn snapshot(&self) -> (Result<Vec<R>, FetchError>, Option<Duration>) {
        match self.state.lock() {
            Ok(state) => {
                let result = match &state.failure {
                    Some(err) => Err(err.clone()),
                    None => Ok(state.records.clone()),
                };
                (result, state.delay)
            }
            Err(_) => (Err(FetchError::Api("source state poisoned".into())), None),
        }
    }
}

impl<R: Clone + Send + Sync> DataSource<R> for StaticSource<R> {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<R>, FetchError>> {
        let (result, delay) = self.snapshot();
        Box::pin(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            result
        })
    }
}
