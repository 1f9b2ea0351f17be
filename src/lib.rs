//! # workgate
//!
//! **Workgate** runs one supervised background worker thread and implements
//! the two rendezvous around it:
//!
//! - a **startup gate**: `start()` does not return until the worker has
//!   announced that it is running;
//! - a **shutdown rendezvous**: `stop()` waits for the worker to terminate,
//!   even if it already terminated long before, and only then releases the
//!   worker's state.
//!
//! ## Architecture
//! ```text
//!  host ── start() ──►┌──────────────────────────────┐
//!                     │ Supervisor                   │
//!                     │  - Config / TaskRef / Spawn  │
//!                     │  - SubscriberSet             │
//!                     └──────┬───────────────────────┘
//!                            │ WorkerLifecycle::spawn
//!                            ▼
//!               ┌────────────────────────────┐      worker thread
//!               │ WorkerShared (Arc)         │◄──── implicit ref
//!  supervisor ──►  StartupGate               │
//!  extra ref    │  state: Created..Terminated│      Running
//!               │  exit_code                 │      └► signal_ready()
//!               │  completion: Option<Signal>│      Executing: task.run()
//!               │  join: JoinHandle          │      └► emit WorkerExited
//!               └────────────────────────────┘      Terminated: retire + fire signal
//!                            ▲                      drop implicit ref
//!  host ── stop() ──► ShutdownCoordinator
//!                      ├─ signal retired?  → skip wait
//!                      ├─ else unpark + wait(signal)
//!                      └─ join, drop extra ref, emit ShutdownCompleted
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types                                         |
//! |-------------------|--------------------------------------------------------------|---------------------------------------------------|
//! | **Supervision**   | Host entry points `start` / `stop`.                          | [`Supervisor`], [`SupervisorBuilder`]             |
//! | **Rendezvous**    | Readiness gate, completion signal, teardown.                 | [`StartupGate`], [`CompletionSignal`], [`ShutdownCoordinator`] |
//! | **Worker**        | Spawning, state machine, shared handle.                      | [`WorkerLifecycle`], [`WorkerHandle`], [`WorkerState`] |
//! | **Tasks**         | What the worker runs.                                        | [`Task`], [`TaskFn`], [`BoundedSleep`]            |
//! | **Subscriber API**| Diagnostics for readiness, termination and shutdown.         | [`Subscribe`], [`SubscriberSet`]                  |
//! | **Errors**        | Spawn failures.                                              | [`RuntimeError`]                                  |
//! | **Configuration** | Thread name, stack size, default work duration.              | [`Config`]                                        |
//!
//! ## Optional features
//! - `logging` (default): exports [`LogWriter`], a `tracing`-backed subscriber.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use workgate::{Config, Supervisor, TaskFn, WorkerContext};
//!
//! let task = TaskFn::arc("nap", |ctx: &WorkerContext| {
//!     ctx.sleep(Duration::from_millis(20));
//!     0
//! });
//!
//! let mut sup = Supervisor::builder(Config::default())
//!     .with_task(task)
//!     .build();
//!
//! sup.start()?;                  // returns once the worker is running
//! let report = sup.stop();       // blocks until the worker finished
//! assert_eq!(report.map(|r| r.exit_code), Some(0));
//! # Ok::<(), workgate::RuntimeError>(())
//! ```
mod core;
mod error;
mod events;
mod subscribers;
mod tasks;

// ---- Public re-exports ----

pub use crate::core::{
    CompletionSignal, Config, DEFAULT_THREAD_NAME, OsThreads, PANIC_EXIT_CODE, ShutdownCoordinator,
    ShutdownReport, Spawn, StartupGate, Supervisor, SupervisorBuilder, WorkerBody, WorkerHandle,
    WorkerLifecycle, WorkerProbe, WorkerState,
};
pub use error::RuntimeError;
pub use events::{Event, EventKind};
pub use subscribers::{Subscribe, SubscriberSet};
pub use tasks::{BoundedSleep, Task, TaskFn, TaskRef, WorkerContext};

#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
