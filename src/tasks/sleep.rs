//! # Built-in sleeping task.
//!
//! [`BoundedSleep`] is the default worker body: park for a fixed duration,
//! then exit with status `0`.

use std::time::Duration;

use crate::tasks::{Task, WorkerContext};

/// Sleeps for a fixed duration, then exits with status `0`.
#[derive(Debug, Clone)]
pub struct BoundedSleep {
    duration: Duration,
}

impl BoundedSleep {
    /// Creates a task that sleeps for `duration`.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// The configured sleep duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Task for BoundedSleep {
    fn name(&self) -> &str {
        "bounded-sleep"
    }

    fn run(&self, ctx: &WorkerContext) -> i32 {
        ctx.sleep(self.duration);
        0
    }
}
