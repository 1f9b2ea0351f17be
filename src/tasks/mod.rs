//! # Task abstractions.
//!
//! This module provides the worker-side types:
//! - [`Task`] - trait for the body a worker thread runs
//! - [`TaskFn`] - function-based task implementation
//! - [`TaskRef`] - shared reference to a task (`Arc<dyn Task>`)
//! - [`WorkerContext`] - what a running task can ask of its worker
//! - [`BoundedSleep`] - built-in task that sleeps for a fixed duration

mod context;
mod sleep;
mod task;
mod task_fn;

pub use context::WorkerContext;
pub use sleep::BoundedSleep;
pub use task::Task;
pub use task_fn::{TaskFn, TaskRef};
