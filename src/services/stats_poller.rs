//! Cancellable periodic refresh of the system statistics dashboard.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::domain::{AppError, SystemStats};
use crate::ports::StoreClient;

/// Handle to a running poller. Stopping or dropping it ends the polling thread.
#[derive(Debug)]
pub struct PollerHandle {
    stop_tx: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Signal the poller and wait for its thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    /// Block until the callback ends polling by returning `Break`.
    pub fn join(mut self) {
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("stats poller thread panicked");
            }
        }
    }

    fn shutdown(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            // The thread may already be gone; a closed channel is fine.
            let _ = tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("stats poller thread panicked");
            }
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Fetch stats immediately and then every `interval`, handing each result to
/// `on_tick` until it returns `Break` or the handle is stopped.
pub fn spawn_stats_poller<C, F>(client: Arc<C>, interval: Duration, mut on_tick: F) -> PollerHandle
where
    C: StoreClient + Send + Sync + 'static,
    F: FnMut(Result<SystemStats, AppError>) -> ControlFlow<()> + Send + 'static,
{
    let (stop_tx, stop_rx) = mpsc::channel::<()>();

    let thread = thread::spawn(move || {
        tracing::debug!(interval_ms = interval.as_millis() as u64, "stats poller started");
        loop {
            let outcome = client.system_stats();
            if let Err(e) = &outcome {
                tracing::warn!(error = %e, "failed to refresh system stats");
            }
            if on_tick(outcome).is_break() {
                break;
            }
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        tracing::debug!("stats poller stopped");
    });

    PollerHandle { stop_tx: Some(stop_tx), thread: Some(thread) }
}
