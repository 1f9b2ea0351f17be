//! # Task abstraction.
//!
//! A [`Task`] is the bounded unit of work a worker thread executes after it
//! has announced readiness. It runs to natural completion: there is no
//! cancellation token, and the supervisor never forces it to stop.

use crate::tasks::WorkerContext;

/// # Bounded, non-cancellable unit of work.
///
/// The value returned by [`run`](Task::run) becomes the worker's exit status,
/// reported back to the supervisor by the shutdown rendezvous.
///
/// Bounded waits must go through [`WorkerContext::sleep`]. Shutdown unparks
/// the worker thread, and that unpark leaves a token behind if the thread was
/// runnable, so a raw `std::thread::park_timeout` inside a task can return
/// right away. `WorkerContext::sleep` parks again for the remaining time.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use workgate::{Task, WorkerContext};
///
/// struct Nap;
///
/// impl Task for Nap {
///     fn name(&self) -> &str { "nap" }
///
///     fn run(&self, ctx: &WorkerContext) -> i32 {
///         ctx.sleep(Duration::from_millis(5));
///         0
///     }
/// }
/// ```
pub trait Task: Send + Sync + 'static {
    /// Returns a stable, human-readable task name.
    fn name(&self) -> &str;

    /// Executes the task to completion and returns its exit status.
    fn run(&self, ctx: &WorkerContext) -> i32;
}
