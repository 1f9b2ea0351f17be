//! # Function-backed task (`TaskFn`)
//!
//! [`TaskFn`] wraps a closure `F: Fn(&WorkerContext) -> i32`.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use workgate::{TaskFn, TaskRef, WorkerContext};
//!
//! let t: TaskRef = TaskFn::arc("worker", |ctx: &WorkerContext| {
//!     ctx.sleep(Duration::from_millis(1));
//!     0
//! });
//!
//! assert_eq!(t.name(), "worker");
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::tasks::{Task, WorkerContext};

/// Shared handle to a task object.
pub type TaskRef = Arc<dyn Task>;

/// Function-backed task implementation.
#[derive(Debug)]
pub struct TaskFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> TaskFn<F> {
    /// Creates a new function-backed task.
    ///
    /// Prefer [`TaskFn::arc`] when you immediately need a [`TaskRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the task and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> Task for TaskFn<F>
where
    F: Fn(&WorkerContext) -> i32 + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, ctx: &WorkerContext) -> i32 {
        (self.f)(ctx)
    }
}
