//! # One-shot completion signal carrying an exit status.
//!
//! Fired by the worker at termination, waited on by the shutdown path.
//! Firing happens at most once: a second [`complete`](CompletionSignal::complete)
//! neither changes the stored status nor wakes anyone.

use parking_lot::{Condvar, Mutex};

/// Single-fire rendezvous with an `i32` payload.
#[derive(Debug, Default)]
pub struct CompletionSignal {
    status: Mutex<Option<i32>>,
    cond: Condvar,
}

impl CompletionSignal {
    /// Creates an unfired signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires the signal with `status` and wakes all waiters.
    ///
    /// Returns `false` (and does nothing) if the signal had already fired.
    pub fn complete(&self, status: i32) -> bool {
        {
            let mut slot = self.status.lock();
            if slot.is_some() {
                return false;
            }
            *slot = Some(status);
        }
        self.cond.notify_all();
        true
    }

    /// Blocks until the signal fires and returns its status.
    pub fn wait(&self) -> i32 {
        let mut slot = self.status.lock();
        loop {
            if let Some(status) = *slot {
                return status;
            }
            self.cond.wait(&mut slot);
        }
    }

    /// Returns true once the signal has fired.
    pub fn is_fired(&self) -> bool {
        self.status.lock().is_some()
    }

    /// The fired status, if any.
    pub fn status(&self) -> Option<i32> {
        *self.status.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    #[test]
    fn wait_returns_status_after_fire() {
        let sig = Arc::new(CompletionSignal::new());
        let s = Arc::clone(&sig);
        let firer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            s.complete(7)
        });

        let started = Instant::now();
        assert_eq!(sig.wait(), 7);
        assert!(started.elapsed() >= Duration::from_millis(40));
        assert!(firer.join().unwrap());
    }

    #[test]
    fn fires_only_once() {
        let sig = CompletionSignal::new();
        assert!(!sig.is_fired());
        assert!(sig.complete(0));
        assert!(!sig.complete(42));
        assert_eq!(sig.status(), Some(0));
        assert_eq!(sig.wait(), 0);
    }
}
