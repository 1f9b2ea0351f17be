//! # Inline event fan-out to multiple subscribers.
//!
//! Provides [`SubscriberSet`] which hands every event to each subscriber in
//! registration order.
//!
//! ## Panic handling
//! Each delivery runs under `catch_unwind`:
//! - a panic is caught and reported (through `tracing` when the `logging` feature is on)
//! - remaining subscribers still receive the event
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if a subscriber panics while holding one of its own locks.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::events::Event;
use crate::subscribers::Subscribe;

/// Fan-out coordinator for event subscribers.
#[derive(Default, Clone)]
pub struct SubscriberSet {
    subs: Vec<Arc<dyn Subscribe>>,
}

impl SubscriberSet {
    /// Creates a set from the given subscribers.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>) -> Self {
        Self { subs }
    }

    /// Number of registered subscribers.
    #[inline]
    pub fn len(&self) -> usize {
        self.subs.len()
    }

    /// Returns true if no subscriber is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Delivers `event` to every subscriber.
    pub fn emit(&self, event: &Event) {
        for sub in &self.subs {
            if let Err(panic_err) = panic::catch_unwind(AssertUnwindSafe(|| sub.on_event(event))) {
                let info = panic_message(&*panic_err);
                report_panic(sub.name(), &info);
            }
        }
    }
}

impl std::fmt::Debug for SubscriberSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.subs.iter().map(|s| s.name()))
            .finish()
    }
}

/// Extracts a readable message from a panic payload.
pub(crate) fn panic_message(any: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(feature = "logging")]
fn report_panic(subscriber: &str, info: &str) {
    tracing::warn!(subscriber, panic = info, "subscriber panicked");
}

#[cfg(not(feature = "logging"))]
fn report_panic(_subscriber: &str, _info: &str) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use parking_lot::Mutex;

    struct Boom;

    impl Subscribe for Boom {
        fn on_event(&self, _event: &Event) {
            panic!("boom");
        }
    }

    #[derive(Default)]
    struct Seen(Mutex<Vec<EventKind>>);

    impl Subscribe for Seen {
        fn on_event(&self, event: &Event) {
            self.0.lock().push(event.kind);
        }
    }

    #[test]
    fn panicking_subscriber_does_not_starve_others() {
        let seen = Arc::new(Seen::default());
        let set = SubscriberSet::new(vec![Arc::new(Boom), seen.clone()]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert!(SubscriberSet::default().is_empty());

        set.emit(&Event::new(EventKind::WorkerReady));
        set.emit(&Event::new(EventKind::WorkerExited));

        assert_eq!(
            *seen.0.lock(),
            vec![EventKind::WorkerReady, EventKind::WorkerExited]
        );
    }

    #[test]
    fn panic_payloads_are_readable() {
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(&*owned), "owned");
        let other: Box<dyn std::any::Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(&*other), "unknown panic");
    }
}
