//! # Diagnostic events emitted along the worker lifecycle.
//!
//! The [`EventKind`] enum names the points where the runtime reports progress:
//! - **Startup**: spawn failure, readiness rendezvous
//! - **Worker**: natural termination
//! - **Shutdown**: the rendezvous wait and its completion
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//!
//! ## Example
//! ```rust
//! use workgate::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::ShutdownCompleted)
//!     .with_worker("wqdemod")
//!     .with_exit_code(0);
//!
//! assert_eq!(ev.kind, EventKind::ShutdownCompleted);
//! assert_eq!(ev.worker.as_deref(), Some("wqdemod"));
//! assert_eq!(ev.exit_code, Some(0));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of runtime events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The host scheduler refused to create the worker.
    ///
    /// Sets:
    /// - `worker`: worker name
    /// - `reason`: OS error message
    SpawnFailed,

    /// The supervisor observed the worker's readiness signal.
    ///
    /// Sets:
    /// - `worker`: worker name
    WorkerReady,

    /// The worker finished its task and is about to release its reference.
    ///
    /// Sets:
    /// - `worker`: worker name
    /// - `exit_code`: status returned by the task
    /// - `reason`: set only when the task panicked
    WorkerExited,

    /// Shutdown found the worker still alive and waited for its completion signal.
    ///
    /// Sets:
    /// - `worker`: worker name
    ShutdownWaited,

    /// Shutdown rendezvous finished and the worker handle was released.
    ///
    /// Sets:
    /// - `worker`: worker name
    /// - `exit_code`: the worker's exit status
    ShutdownCompleted,
}

impl EventKind {
    /// Returns a short stable label (kebab-case) used by log output.
    pub fn as_label(&self) -> &'static str {
        match self {
            EventKind::SpawnFailed => "spawn-failed",
            EventKind::WorkerReady => "worker-ready",
            EventKind::WorkerExited => "worker-exited",
            EventKind::ShutdownWaited => "shutdown-waited",
            EventKind::ShutdownCompleted => "shutdown-completed",
        }
    }
}

/// Runtime event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Debug, Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Name of the worker thread, if applicable.
    pub worker: Option<Arc<str>>,
    /// Worker exit status.
    pub exit_code: Option<i32>,
    /// Human-readable reason (errors, panic payloads).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            worker: None,
            exit_code: None,
            reason: None,
        }
    }

    /// Attaches a worker name.
    #[inline]
    pub fn with_worker(mut self, worker: impl Into<Arc<str>>) -> Self {
        self.worker = Some(worker.into());
        self
    }

    /// Attaches an exit status.
    #[inline]
    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = Some(code);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_is_monotonic() {
        let a = Event::new(EventKind::WorkerReady);
        let b = Event::new(EventKind::WorkerExited);
        assert!(b.seq > a.seq);
    }
}
