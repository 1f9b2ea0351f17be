//! Runtime events emitted by the supervisor and the worker.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//!
//! ## Quick reference
//! - **Publishers**: `Supervisor::start` (readiness, spawn failure), the worker
//!   body (natural termination), `ShutdownCoordinator` (wait and completion).
//! - **Consumers**: every [`Subscribe`](crate::Subscribe) registered in the
//!   [`SubscriberSet`](crate::SubscriberSet).

mod event;

pub use event::{Event, EventKind};
