//! Live system statistics.

use std::ops::ControlFlow;
use std::time::Duration;

use crate::app::AppContext;
use crate::domain::{AppError, SystemStats};
use crate::ports::StoreClient;
use crate::services::{PollerHandle, spawn_stats_poller};

/// Fetch one snapshot.
pub fn snapshot<C: StoreClient>(ctx: &AppContext<C>) -> Result<SystemStats, AppError> {
    ctx.client().system_stats()
}

/// Poll at the configured interval, passing each successful snapshot to
/// `on_stats`. With a `limit`, at most that many snapshots are delivered.
pub fn watch<C, F>(ctx: &AppContext<C>, limit: Option<u64>, mut on_stats: F) -> PollerHandle
where
    C: StoreClient + Send + Sync + 'static,
    F: FnMut(&SystemStats) + Send + 'static,
{
    let interval = Duration::from_millis(ctx.config().dashboard.poll_interval_ms);
    let mut delivered = 0u64;
    let exhausted = move |delivered: u64| limit.is_some_and(|limit| delivered >= limit);

    spawn_stats_poller(ctx.shared_client(), interval, move |result| {
        if exhausted(delivered) {
            return ControlFlow::Break(());
        }
        // Failures are logged by the poller; keep the last good view.
        let Ok(stats) = result else {
            return ControlFlow::Continue(());
        };
        on_stats(&stats);
        delivered += 1;
        if exhausted(delivered) { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    })
}
