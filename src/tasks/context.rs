//! # Worker-side execution context.
//!
//! [`WorkerContext`] is handed to [`Task::run`](crate::Task::run). Its
//! [`sleep`](WorkerContext::sleep) is the interruptible bounded wait of the
//! worker: the thread is parked, so the shutdown path can nudge it with
//! `Thread::unpark`, yet the wait always lasts the full duration. A nudge is
//! counted and the thread parks again for the remaining time.

use std::thread;
use std::time::{Duration, Instant};

/// Handle a running task uses to interact with its worker thread.
#[derive(Debug)]
pub struct WorkerContext {
    name: String,
}

impl WorkerContext {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Name of the worker thread running the task.
    pub fn worker_name(&self) -> &str {
        &self.name
    }

    /// Parks the worker for `duration`.
    ///
    /// Wakeups before the deadline (unpark nudges or spurious returns from
    /// `park_timeout`) do not end the wait. Returns how many of them were
    /// observed.
    pub fn sleep(&self, duration: Duration) -> u32 {
        let deadline = Instant::now() + duration;
        let mut early = 0;
        loop {
            let now = Instant::now();
            if now >= deadline {
                return early;
            }
            thread::park_timeout(deadline - now);
            if Instant::now() < deadline {
                early += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_survives_unpark() {
        let worker = thread::spawn(|| {
            let ctx = WorkerContext::new("sleeper");
            let started = Instant::now();
            let early = ctx.sleep(Duration::from_millis(150));
            (started.elapsed(), early)
        });

        thread::sleep(Duration::from_millis(30));
        worker.thread().unpark();

        let (elapsed, early) = worker.join().unwrap();
        assert!(elapsed >= Duration::from_millis(150), "woke after {elapsed:?}");
        assert!(early >= 1);
    }

    #[test]
    fn zero_sleep_returns_immediately() {
        let ctx = WorkerContext::new("sleeper");
        assert_eq!(ctx.sleep(Duration::ZERO), 0);
        assert_eq!(ctx.worker_name(), "sleeper");
    }
}
