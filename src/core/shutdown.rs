//! # Shutdown rendezvous with a worker that may already be gone.
//!
//! ```text
//! shutdown(handle)
//!   ├─► signal = handle.completion_signal()      (one locked load)
//!   ├─ None ──► worker retired the signal: nothing to wait for
//!   └─ Some ──► nudge the thread (unpark) ─► signal.wait() ─► emit ShutdownWaited
//!   ├─► read exit code
//!   ├─► join the OS thread (already past its body)
//!   ├─► drop the supervisor reference (frees the worker state if last)
//!   └─► emit ShutdownCompleted
//! ```
//!
//! ## Rules
//! - Never returns before the worker reached `Terminated`.
//! - Waits on the completion signal at most once.
//! - Consumes the handle, so the reference cannot outlive the call.

use std::sync::Arc;

use crate::core::worker::WorkerHandle;
use crate::events::{Event, EventKind};
use crate::subscribers::SubscriberSet;

/// Outcome of a completed shutdown rendezvous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShutdownReport {
    /// Name of the worker that was shut down.
    pub worker: Arc<str>,
    /// Exit status returned by the worker's task.
    pub exit_code: i32,
    /// True if the worker was still alive and shutdown had to wait for it.
    pub waited: bool,
}

/// Performs the teardown rendezvous for a worker handle.
#[derive(Debug, Clone, Default)]
pub struct ShutdownCoordinator {
    subs: SubscriberSet,
}

impl ShutdownCoordinator {
    /// Creates a coordinator reporting to `subs`.
    pub fn new(subs: SubscriberSet) -> Self {
        Self { subs }
    }

    /// Waits for the worker to terminate (unless it already has), then
    /// releases `handle`.
    pub fn shutdown(&self, handle: WorkerHandle) -> ShutdownReport {
        let worker = handle.name_arc();

        let (exit_code, waited) = match handle.completion_signal() {
            Some(signal) => {
                handle.nudge();
                let code = signal.wait();
                self.subs
                    .emit(&Event::new(EventKind::ShutdownWaited).with_worker(Arc::clone(&worker)));
                (code, true)
            }
            // The exit code is stored before the signal is retired.
            None => (handle.stored_exit_code(), false),
        };

        if let Err(payload) = handle.reap() {
            report_join_panic(&worker, &crate::subscribers::panic_message(&*payload));
        }
        drop(handle);

        self.subs.emit(
            &Event::new(EventKind::ShutdownCompleted)
                .with_worker(Arc::clone(&worker))
                .with_exit_code(exit_code),
        );

        ShutdownReport {
            worker,
            exit_code,
            waited,
        }
    }
}

#[cfg(feature = "logging")]
fn report_join_panic(worker: &str, info: &str) {
    tracing::warn!(target: "workgate", worker, panic = info, "worker thread panicked after completion");
}

#[cfg(not(feature = "logging"))]
fn report_join_panic(_worker: &str, _info: &str) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::core::spawn::OsThreads;
    use crate::core::worker::{WorkerLifecycle, WorkerState};
    use crate::tasks::{TaskFn, WorkerContext};
    use std::time::{Duration, Instant};

    fn spawn<F>(f: F) -> WorkerHandle
    where
        F: Fn(&WorkerContext) -> i32 + Send + Sync + 'static,
    {
        WorkerLifecycle::spawn(
            &Config::default(),
            TaskFn::arc("t", f),
            SubscriberSet::default(),
            &OsThreads,
        )
        .unwrap()
    }

    #[test]
    fn waits_for_live_worker() {
        let handle = spawn(|ctx| {
            ctx.sleep(Duration::from_millis(200));
            5
        });
        handle.await_ready();
        let probe = handle.downgrade();

        let started = Instant::now();
        let report = ShutdownCoordinator::default().shutdown(handle);

        assert!(started.elapsed() >= Duration::from_millis(150));
        assert!(report.waited);
        assert_eq!(report.exit_code, 5);
        assert!(!probe.is_alive());
    }

    #[test]
    fn nudge_does_not_cut_the_sleep_short() {
        let handle = spawn(|ctx| {
            let early = ctx.sleep(Duration::from_millis(120));
            i32::try_from(early).unwrap_or(i32::MAX)
        });
        handle.await_ready();
        std::thread::sleep(Duration::from_millis(20));

        let started = Instant::now();
        let report = ShutdownCoordinator::default().shutdown(handle);

        assert!(started.elapsed() >= Duration::from_millis(80));
        assert!(report.exit_code >= 1, "the nudge should be seen as an early wakeup");
    }

    #[test]
    fn waited_shutdown_reports_the_fired_status() {
        let handle = spawn(|ctx| {
            ctx.sleep(Duration::from_millis(60));
            -3
        });
        handle.await_ready();

        let report = ShutdownCoordinator::default().shutdown(handle);
        assert!(report.waited);
        assert_eq!(report.exit_code, -3);
    }

    #[test]
    fn nudge_on_a_runnable_worker_does_not_shorten_a_later_sleep() {
        let handle = spawn(|ctx| {
            // Still runnable when shutdown unparks it: the park token is left behind.
            let spin_until = Instant::now() + Duration::from_millis(60);
            while Instant::now() < spin_until {
                std::hint::spin_loop();
            }
            let slept_from = Instant::now();
            ctx.sleep(Duration::from_millis(100));
            if slept_from.elapsed() >= Duration::from_millis(100) { 0 } else { 2 }
        });
        handle.await_ready();

        let report = ShutdownCoordinator::default().shutdown(handle);
        assert!(report.waited);
        assert_eq!(report.exit_code, 0, "sleep returned early after a stale unpark");
    }

    #[test]
    fn skips_wait_for_finished_worker() {
        let handle = spawn(|_| 9);
        let deadline = Instant::now() + Duration::from_secs(5);
        while handle.ref_count() > 1 {
            assert!(Instant::now() < deadline);
            std::thread::sleep(Duration::from_millis(1));
        }
        assert_eq!(handle.state(), WorkerState::Terminated);

        let report = ShutdownCoordinator::default().shutdown(handle);
        assert!(!report.waited);
        assert_eq!(report.exit_code, 9);
    }
}
