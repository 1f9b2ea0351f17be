//! # Supervisor: host-facing activation and deactivation.
//!
//! The [`Supervisor`] owns the configuration, the worker task, the subscriber
//! set, and (between `start` and `stop`) the supervisor reference to the worker.
//!
//! ## Flow
//! ```text
//! start():
//!   WorkerLifecycle::spawn(task)
//!     ├─ Err ──► emit SpawnFailed ──► Err(RuntimeError::SpawnFailed)   (no state kept)
//!     └─ Ok(handle)
//!          └─► handle.await_ready() ──► emit WorkerReady ──► Ok(())
//!
//! ... worker runs on its own schedule, emits WorkerExited when done ...
//!
//! stop():
//!   take handle
//!     ├─ None ──► no-op
//!     └─ Some ──► ShutdownCoordinator::shutdown(handle) ──► ShutdownReport
//! ```
//!
//! Dropping a started supervisor performs `stop()`.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use workgate::{Config, Supervisor};
//!
//! let cfg = Config { work: Duration::from_millis(20), ..Config::default() };
//! let mut sup = Supervisor::new(cfg, Vec::new());
//!
//! sup.start()?;
//! let report = sup.stop().expect("worker was started");
//! assert_eq!(report.exit_code, 0);
//! # Ok::<(), workgate::RuntimeError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use crate::{
    core::{
        Config, ShutdownCoordinator, ShutdownReport, Spawn, SupervisorBuilder,
        worker::{WorkerHandle, WorkerLifecycle},
    },
    error::RuntimeError,
    events::{Event, EventKind},
    subscribers::{Subscribe, SubscriberSet},
    tasks::TaskRef,
};

/// Starts one background worker and tears it down safely.
pub struct Supervisor {
    cfg: Config,
    task: TaskRef,
    subs: SubscriberSet,
    spawner: Arc<dyn Spawn>,
    worker: Option<WorkerHandle>,
}

impl Supervisor {
    /// Creates a supervisor running the default task with the given subscribers.
    pub fn new(cfg: Config, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        SupervisorBuilder::new(cfg)
            .with_subscribers(subscribers)
            .build()
    }

    /// Returns a builder for custom tasks and schedulers.
    pub fn builder(cfg: Config) -> SupervisorBuilder {
        SupervisorBuilder::new(cfg)
    }

    pub(crate) fn new_internal(
        cfg: Config,
        task: TaskRef,
        subs: SubscriberSet,
        spawner: Arc<dyn Spawn>,
    ) -> Self {
        Self {
            cfg,
            task,
            subs,
            spawner,
            worker: None,
        }
    }

    /// Spawns the worker and blocks until it signals readiness.
    ///
    /// On spawn failure nothing is kept and a later [`stop`](Self::stop) is a no-op.
    pub fn start(&mut self) -> Result<(), RuntimeError> {
        if let Some(worker) = &self.worker {
            return Err(RuntimeError::AlreadyStarted {
                name: worker.name().to_string(),
            });
        }

        let handle = match WorkerLifecycle::spawn(
            &self.cfg,
            Arc::clone(&self.task),
            self.subs.clone(),
            self.spawner.as_ref(),
        ) {
            Ok(handle) => handle,
            Err(err) => {
                self.subs.emit(
                    &Event::new(EventKind::SpawnFailed)
                        .with_worker(self.cfg.thread_name.as_str())
                        .with_reason(err.to_string()),
                );
                return Err(err);
            }
        };

        handle.await_ready();
        self.subs
            .emit(&Event::new(EventKind::WorkerReady).with_worker(handle.name()));
        self.worker = Some(handle);
        Ok(())
    }

    /// Waits for the worker to finish and releases it.
    ///
    /// Returns `None` when there is no worker (never started, failed to
    /// start, or already stopped).
    pub fn stop(&mut self) -> Option<ShutdownReport> {
        let handle = self.worker.take()?;
        Some(ShutdownCoordinator::new(self.subs.clone()).shutdown(handle))
    }

    /// Returns true between a successful `start` and the following `stop`.
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// The supervisor's handle to the worker, if one is held.
    pub fn worker(&self) -> Option<&WorkerHandle> {
        self.worker.as_ref()
    }

    /// Runtime configuration.
    pub fn config(&self) -> &Config {
        &self.cfg
    }
}

impl Drop for Supervisor {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for Supervisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supervisor")
            .field("cfg", &self.cfg)
            .field("task", &self.task.name())
            .field("subs", &self.subs)
            .field("worker", &self.worker)
            .finish()
    }
}
