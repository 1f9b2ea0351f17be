//! # Worker lifecycle: spawning, state tracking, and the shared handle.
//!
//! ```text
//! WorkerLifecycle::spawn()
//!   ├─► WorkerShared { gate, state=Created, completion=Some(signal), join }
//!   ├─► supervisor ref (returned)  +  worker ref (moved into the thread body)
//!   └─► Spawn::spawn(body)
//!
//! worker thread:
//!   Running ─► ReadySignaled (gate opened) ─► Executing (task.run)
//!           ─► emit WorkerExited
//!           ─► Terminated: store exit code, take completion slot, fire signal
//!           ─► drop worker ref
//! ```
//!
//! ## Rules
//! - State only moves forward; `Terminated` is final.
//! - The exit code and the `Terminated` state are published before the
//!   completion slot is cleared, so anyone who finds the slot empty also
//!   sees the final state and status.
//! - `WorkerShared` is freed only when both the worker ref and the
//!   supervisor ref are gone.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicI32, AtomicU8, Ordering};
use std::sync::{Arc, Weak};
use std::thread::JoinHandle;

use parking_lot::Mutex;

use crate::core::completion::CompletionSignal;
use crate::core::gate::StartupGate;
use crate::core::spawn::Spawn;
use crate::core::Config;
use crate::error::RuntimeError;
use crate::events::{Event, EventKind};
use crate::subscribers::{SubscriberSet, panic_message};
use crate::tasks::{TaskRef, WorkerContext};

/// Exit status reported when the task panics instead of returning.
pub const PANIC_EXIT_CODE: i32 = 1;

/// Lifecycle states of the worker.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkerState {
    /// Shared state exists; the thread has not run yet.
    Created = 0,
    /// The thread body started.
    Running = 1,
    /// The startup gate was opened.
    ReadySignaled = 2,
    /// The task is running.
    Executing = 3,
    /// The task returned and the completion signal fired.
    Terminated = 4,
}

impl WorkerState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => WorkerState::Created,
            1 => WorkerState::Running,
            2 => WorkerState::ReadySignaled,
            3 => WorkerState::Executing,
            _ => WorkerState::Terminated,
        }
    }
}

/// State shared between the worker thread and the supervisor.
struct WorkerShared {
    name: Arc<str>,
    gate: StartupGate,
    state: AtomicU8,
    exit_code: AtomicI32,
    completion: Mutex<Option<Arc<CompletionSignal>>>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl WorkerShared {
    fn new(name: Arc<str>) -> Self {
        Self {
            name,
            gate: StartupGate::new(),
            state: AtomicU8::new(WorkerState::Created as u8),
            exit_code: AtomicI32::new(0),
            completion: Mutex::new(Some(Arc::new(CompletionSignal::new()))),
            join: Mutex::new(None),
        }
    }

    fn advance(&self, next: WorkerState) {
        self.state.fetch_max(next as u8, Ordering::AcqRel);
    }

    fn terminate(&self, code: i32) {
        self.exit_code.store(code, Ordering::Release);
        self.advance(WorkerState::Terminated);
        let signal = self.completion.lock().take();
        if let Some(signal) = signal {
            signal.complete(code);
        }
    }
}

/// Shared-ownership handle to the worker.
///
/// Cloning takes another reference; the worker's state lives until the last
/// clone is dropped.
#[derive(Clone)]
pub struct WorkerHandle {
    shared: Arc<WorkerShared>,
}

impl WorkerHandle {
    /// Name of the worker thread.
    pub fn name(&self) -> &str {
        &self.shared.name
    }

    pub(crate) fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.shared.name)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> WorkerState {
        WorkerState::from_u8(self.shared.state.load(Ordering::Acquire))
    }

    /// Returns true once the worker reached [`WorkerState::Terminated`].
    pub fn is_terminated(&self) -> bool {
        self.state() == WorkerState::Terminated
    }

    /// The exit status, available once the worker terminated.
    pub fn exit_code(&self) -> Option<i32> {
        if self.is_terminated() {
            Some(self.shared.exit_code.load(Ordering::Acquire))
        } else {
            None
        }
    }

    /// Raw exit status slot; final once the completion signal is retired.
    pub(crate) fn stored_exit_code(&self) -> i32 {
        debug_assert!(self.is_terminated());
        self.shared.exit_code.load(Ordering::Acquire)
    }

    /// Blocks until the worker opened the startup gate.
    pub fn await_ready(&self) {
        self.shared.gate.await_ready();
    }

    /// Non-blocking readiness check.
    pub fn is_ready(&self) -> bool {
        self.shared.gate.is_ready()
    }

    /// Loads the completion signal in one locked step.
    ///
    /// `None` means the worker already terminated and retired the signal.
    pub fn completion_signal(&self) -> Option<Arc<CompletionSignal>> {
        self.shared.completion.lock().clone()
    }

    /// Number of outstanding references to the worker state.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.shared)
    }

    /// Returns a weak probe that reports whether the worker state still exists.
    pub fn downgrade(&self) -> WorkerProbe {
        WorkerProbe {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Wakes the worker thread if it is parked. A no-op for a runnable or
    /// finished thread.
    pub(crate) fn nudge(&self) {
        if let Some(join) = self.shared.join.lock().as_ref() {
            join.thread().unpark();
        }
    }

    /// Joins the OS thread. Only meaningful after the completion signal fired.
    pub(crate) fn reap(&self) -> std::thread::Result<()> {
        let join = self.shared.join.lock().take();
        match join {
            Some(join) => join.join(),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for WorkerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerHandle")
            .field("name", &self.name())
            .field("state", &self.state())
            .field("refs", &self.ref_count())
            .finish()
    }
}

/// Weak observer of a worker's shared state.
#[derive(Debug, Clone)]
pub struct WorkerProbe {
    shared: Weak<WorkerShared>,
}

impl WorkerProbe {
    /// Returns true while at least one [`WorkerHandle`] exists.
    pub fn is_alive(&self) -> bool {
        self.shared.strong_count() > 0
    }

    /// Number of outstanding strong references.
    pub fn ref_count(&self) -> usize {
        self.shared.strong_count()
    }
}

/// Creates worker threads.
#[derive(Debug)]
pub struct WorkerLifecycle;

impl WorkerLifecycle {
    /// Spawns a worker running `task` and returns the supervisor's handle.
    ///
    /// The worker's own reference is created before the thread exists, so the
    /// shared state cannot disappear before the caller gets its handle.
    pub fn spawn(
        cfg: &Config,
        task: TaskRef,
        subs: SubscriberSet,
        spawner: &dyn Spawn,
    ) -> Result<WorkerHandle, RuntimeError> {
        let handle = WorkerHandle {
            shared: Arc::new(WorkerShared::new(Arc::from(cfg.thread_name.as_str()))),
        };
        let worker_ref = handle.clone();

        let join = spawner
            .spawn(cfg, Box::new(move || worker_main(worker_ref, task, subs)))
            .map_err(|source| RuntimeError::SpawnFailed {
                name: cfg.thread_name.clone(),
                source,
            })?;

        *handle.shared.join.lock() = Some(join);
        Ok(handle)
    }
}

/// Body of the worker thread. Consumes the worker's reference.
fn worker_main(handle: WorkerHandle, task: TaskRef, subs: SubscriberSet) {
    let shared = &handle.shared;
    shared.advance(WorkerState::Running);
    shared.advance(WorkerState::ReadySignaled);
    shared.gate.signal_ready();

    shared.advance(WorkerState::Executing);
    let ctx = WorkerContext::new(shared.name.to_string());
    let (code, panicked) = match panic::catch_unwind(AssertUnwindSafe(|| task.run(&ctx))) {
        Ok(code) => (code, None),
        Err(payload) => (PANIC_EXIT_CODE, Some(panic_message(&*payload))),
    };

    let mut ev = Event::new(EventKind::WorkerExited)
        .with_worker(Arc::clone(&shared.name))
        .with_exit_code(code);
    if let Some(reason) = panicked {
        ev = ev.with_reason(reason);
    }
    subs.emit(&ev);

    shared.terminate(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::spawn::OsThreads;
    use crate::tasks::TaskFn;
    use std::time::{Duration, Instant};

    fn spawn_fn<F>(f: F) -> WorkerHandle
    where
        F: Fn(&WorkerContext) -> i32 + Send + Sync + 'static,
    {
        let cfg = Config {
            thread_name: "worker-test".into(),
            ..Config::default()
        };
        WorkerLifecycle::spawn(&cfg, TaskFn::arc("t", f), SubscriberSet::default(), &OsThreads)
            .unwrap()
    }

    fn wait_until(mut cond: impl FnMut() -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !cond() {
            assert!(Instant::now() < deadline, "condition not reached in time");
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn states_move_forward_to_terminated() {
        let handle = spawn_fn(|ctx| {
            ctx.sleep(Duration::from_millis(50));
            3
        });
        handle.await_ready();
        assert!(handle.state() >= WorkerState::ReadySignaled);
        assert_eq!(handle.exit_code(), None);

        wait_until(|| handle.is_terminated());
        assert_eq!(handle.exit_code(), Some(3));
        assert!(handle.completion_signal().is_none());
        handle.reap().unwrap();
    }

    #[test]
    fn panicking_task_still_terminates() {
        let handle = spawn_fn(|_| panic!("task blew up"));
        let signal = handle.completion_signal();

        wait_until(|| handle.is_terminated());
        assert_eq!(handle.exit_code(), Some(PANIC_EXIT_CODE));
        if let Some(signal) = signal {
            assert_eq!(signal.wait(), PANIC_EXIT_CODE);
        }
        handle.reap().unwrap();
    }

    #[test]
    fn worker_drops_its_reference_on_exit() {
        let handle = spawn_fn(|_| 0);
        wait_until(|| handle.ref_count() == 1);
        assert!(handle.is_terminated());
        handle.reap().unwrap();

        let probe = handle.downgrade();
        drop(handle);
        assert!(!probe.is_alive());
    }
}
