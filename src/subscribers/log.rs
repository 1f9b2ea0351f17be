//! # Logging subscriber backed by `tracing`.
//!
//! [`LogWriter`] turns lifecycle events into leveled `tracing` records.
//!
//! ## Output format (with the `tracing-subscriber` fmt layer)
//! ```text
//! INFO  workgate: worker signaled readiness worker="wqdemod"
//! INFO  workgate: woke up, worker finished worker="wqdemod" exit_code=0
//! DEBUG workgate: waited for the worker to exit worker="wqdemod"
//! INFO  workgate: worker exited worker="wqdemod" exit_code=0
//! ERROR workgate: failed to start worker worker="wqdemod" reason="..."
//! ```

use crate::Subscribe;
use crate::events::{Event, EventKind};

/// `tracing` sink for lifecycle events.
///
/// Records are emitted under the `workgate` target; install any
/// `tracing` subscriber to collect them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWriter;

impl LogWriter {
    /// Creates a new log writer.
    pub fn new() -> Self {
        Self
    }
}

impl Subscribe for LogWriter {
    fn on_event(&self, e: &Event) {
        let worker = e.worker.as_deref().unwrap_or("-");
        match e.kind {
            EventKind::SpawnFailed => {
                tracing::error!(
                    target: "workgate",
                    worker,
                    reason = e.reason.as_deref().unwrap_or(""),
                    "failed to start worker"
                );
            }
            EventKind::WorkerReady => {
                tracing::info!(target: "workgate", worker, "worker signaled readiness");
            }
            EventKind::WorkerExited => match e.reason.as_deref() {
                Some(reason) => tracing::warn!(
                    target: "workgate",
                    worker,
                    exit_code = e.exit_code,
                    reason,
                    "worker task panicked"
                ),
                None => tracing::info!(
                    target: "workgate",
                    worker,
                    exit_code = e.exit_code,
                    "woke up, worker finished"
                ),
            },
            EventKind::ShutdownWaited => {
                tracing::debug!(target: "workgate", worker, "waited for the worker to exit");
            }
            EventKind::ShutdownCompleted => {
                tracing::info!(
                    target: "workgate",
                    worker,
                    exit_code = e.exit_code,
                    "worker exited"
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}
