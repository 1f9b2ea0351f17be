//! # Event subscribers for the workgate runtime.
//!
//! This module provides the [`Subscribe`] trait, the [`SubscriberSet`] fan-out
//! and the built-in [`LogWriter`] (feature `logging`).
//!
//! ## Architecture
//! ```text
//! Supervisor / worker / shutdown ── emit(Event) ──► SubscriberSet
//!                                                       │
//!                                         ┌─────────────┼─────────────┐
//!                                         ▼             ▼             ▼
//!                                     LogWriter      Custom          ...
//!                                   (tracing sink)
//! ```
//!
//! ## Implementing custom subscribers
//! ```no_run
//! use workgate::{Event, EventKind, Subscribe};
//!
//! struct ExitAudit;
//!
//! impl Subscribe for ExitAudit {
//!     fn on_event(&self, event: &Event) {
//!         if event.kind == EventKind::ShutdownCompleted {
//!             // persist event.exit_code somewhere
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "exit-audit" }
//! }
//! ```

#[cfg(feature = "logging")]
mod log;
mod set;
mod subscriber;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub(crate) use set::panic_message;
pub use set::SubscriberSet;
pub use subscriber::Subscribe;
