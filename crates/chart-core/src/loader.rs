// File: crates/chart-core/src/loader.rs
// Summary: Cancellable background load of the price series, owned by the chart's host.
// Notes:
// - Dropping a SeriesLoad aborts the task, so a torn-down host never receives a late result.

use std::future::Future;

use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::ChartError;
use crate::fetch::BpiClient;
use crate::series::Series;

pub type LoadOutcome = Result<Series, ChartError>;

pub struct SeriesLoad {
    task: JoinHandle<()>,
    rx: Option<oneshot::Receiver<LoadOutcome>>,
}

impl SeriesLoad {
    /// Run `load` on the current tokio runtime.
    pub fn spawn<F>(load: F) -> Self
    where
        F: Future<Output = LoadOutcome> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let outcome = load.await;
            if tx.send(outcome).is_err() {
                debug!("series load finished after its receiver was dropped");
            }
        });
        Self { task, rx: Some(rx) }
    }

    /// Fetch from `client` in the background.
    pub fn fetch(client: BpiClient) -> Self {
        Self::spawn(async move { client.fetch_series().await })
    }

    /// Abort the task. A later `try_take`/`wait` yields `ChartError::Cancelled`.
    pub fn cancel(&mut self) {
        debug!("series load cancelled");
        self.task.abort();
    }

    /// Non-blocking poll. Yields the outcome once, then `None`.
    pub fn try_take(&mut self) -> Option<LoadOutcome> {
        let rx = self.rx.as_mut()?;
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(ChartError::Cancelled),
        };
        self.rx = None;
        Some(outcome)
    }

    /// Wait for the outcome.
    pub async fn wait(mut self) -> LoadOutcome {
        let Some(rx) = self.rx.take() else {
            return Err(ChartError::Cancelled);
        };
        rx.await.unwrap_or(Err(ChartError::Cancelled))
    }
}

impl Drop for SeriesLoad {
    fn drop(&mut self) {
        self.task.abort();
    }
}
