//! # Startup gate: one-shot readiness rendezvous.
//!
//! ```text
//! supervisor                          worker
//!   await_ready()                       signal_ready()
//!     lock                                lock
//!     while !ready {                      ready = true
//!       waiters += 1                      n = waiters
//!       wait (unlock + park, relock)      unlock
//!       waiters -= 1                      if n > 0 → notify_all
//!     }
//!     unlock
//! ```
//!
//! ## Rules
//! - The flag goes `false → true` once and is never reset.
//! - Waiter registration and the flag share one lock, so a signal that lands
//!   between the supervisor's check and its wait cannot be lost.
//! - The predicate is re-checked after every wakeup (spurious wakeups are harmless).
//! - Mutex release on the worker side pairs with acquisition on the
//!   supervisor side: once `await_ready` returns, everything the worker wrote
//!   before `signal_ready` is visible.

use parking_lot::{Condvar, Mutex};

#[derive(Debug, Default)]
struct GateState {
    ready: bool,
    waiters: usize,
}

/// Condition-variable guarded readiness flag.
#[derive(Debug, Default)]
pub struct StartupGate {
    state: Mutex<GateState>,
    cond: Condvar,
}

impl StartupGate {
    /// Creates a closed gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the gate and wakes every registered waiter.
    ///
    /// Returns `true` for the call that opened the gate; later calls change
    /// nothing and wake nobody.
    pub fn signal_ready(&self) -> bool {
        let waiters = {
            let mut st = self.state.lock();
            if st.ready {
                return false;
            }
            st.ready = true;
            st.waiters
        };
        if waiters > 0 {
            self.cond.notify_all();
        }
        true
    }

    /// Blocks until the gate is open. Returns immediately if it already is.
    pub fn await_ready(&self) {
        let mut st = self.state.lock();
        while !st.ready {
            st.waiters += 1;
            self.cond.wait(&mut st);
            st.waiters -= 1;
        }
    }

    /// Non-blocking check of the readiness flag.
    pub fn is_ready(&self) -> bool {
        self.state.lock().ready
    }

    #[cfg(test)]
    fn waiters(&self) -> usize {
        self.state.lock().waiters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    #[test]
    fn signal_before_wait_is_not_lost() {
        let gate = StartupGate::new();
        assert!(gate.signal_ready());

        let started = Instant::now();
        gate.await_ready();
        assert!(started.elapsed() < Duration::from_millis(100));
        assert!(gate.is_ready());
    }

    #[test]
    fn wait_blocks_until_signal() {
        let gate = Arc::new(StartupGate::new());
        let g = Arc::clone(&gate);

        let waiter = thread::spawn(move || {
            g.await_ready();
            Instant::now()
        });

        while gate.waiters() == 0 {
            thread::yield_now();
        }
        let signaled_at = Instant::now();
        assert!(gate.signal_ready());

        let returned_at = waiter.join().unwrap();
        assert!(returned_at >= signaled_at);
        assert_eq!(gate.waiters(), 0);
    }

    #[test]
    fn all_waiters_are_released() {
        let gate = Arc::new(StartupGate::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let g = Arc::clone(&gate);
                thread::spawn(move || g.await_ready())
            })
            .collect();

        while gate.waiters() < 4 {
            thread::yield_now();
        }
        gate.signal_ready();
        for h in handles {
            h.join().unwrap();
        }
    }

    #[test]
    fn second_signal_is_inert() {
        let gate = StartupGate::new();
        assert!(gate.signal_ready());
        assert!(!gate.signal_ready());
        assert!(gate.is_ready());
    }
}
