//! # Event subscriber trait.
//!
//! Provides [`Subscribe`] an extension point for plugging diagnostic sinks into the runtime.
//!
//! ## Rules
//! - Events are delivered synchronously, in the context that produced them
//!   (supervisor thread or worker thread).
//! - A panicking subscriber is isolated; the lifecycle keeps going.
//! - Subscribers must not block: the worker publishes its termination event
//!   while the supervisor may be waiting for it.

use crate::events::Event;

/// Event subscriber for runtime diagnostics.
///
/// ### Implementation requirements
/// - Return quickly; never wait on the worker or the supervisor.
/// - Handle errors internally; do not panic.
pub trait Subscribe: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Panics are caught by [`SubscriberSet`](crate::SubscriberSet).
    fn on_event(&self, event: &Event);

    /// Returns the subscriber name used in diagnostics.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
