use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use super::client::{PollError, SnapshotSource};
use super::snapshot::Snapshot;

pub const DEFAULT_PERIOD: Duration = Duration::from_secs(3);
const MIN_PERIOD: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub enum PollUpdate {
    Started,
    Finished(Result<Snapshot, PollError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollPhase {
    #[default]
    Idle,
    Fetching,
}

impl PollPhase {
    pub fn on_update(self, update: &PollUpdate) -> Self {
        match update {
            PollUpdate::Started => PollPhase::Fetching,
            PollUpdate::Finished(_) => PollPhase::Idle,
        }
    }
}

/// Scheduled polling task.
///
/// Polls once immediately, then every `period`. A fetch is awaited inside
/// the task loop, so at most one request is ever in flight; ticks missed
/// while a slow request runs are delayed rather than bursted. The task is
/// aborted when the handle is dropped.
pub struct Poller {
    refresh_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl Poller {
    pub fn spawn<S: SnapshotSource>(
        source: S,
        period: Duration,
        updates: mpsc::UnboundedSender<PollUpdate>,
    ) -> Self {
        let period = period.max(MIN_PERIOD);
        let (refresh_tx, mut refresh_rx) = mpsc::channel::<()>(1);

        let task = tokio::spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut cycle: u64 = 0;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    Some(()) = refresh_rx.recv() => {
                        tracing::debug!("manual refresh requested");
                        ticker.reset();
                    }
                }

                cycle += 1;
                if updates.send(PollUpdate::Started).is_err() {
                    break;
                }

                let result = source.fetch().await;
                match &result {
                    Ok(snapshot) => tracing::debug!(
                        cycle,
                        processes = snapshot.processes.as_ref().map(Vec::len),
                        "poll succeeded"
                    ),
                    Err(err) => tracing::warn!(cycle, kind = ?err.kind(), error = %err, "poll failed"),
                }

                // Refresh requests that arrived mid-flight are dropped.
                while refresh_rx.try_recv().is_ok() {}

                if updates.send(PollUpdate::Finished(result)).is_err() {
                    break;
                }
            }
            tracing::debug!("poller stopped");
        });

        Poller { refresh_tx, task }
    }

    /// Asks for an immediate cycle. No-op while a request is in flight.
    pub fn refresh(&self) {
        let _ = self.refresh_tx.try_send(());
    }

    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.task.abort();
    }
}
