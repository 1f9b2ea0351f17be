//! Runtime core: the worker lifecycle protocol.
//!
//! The public entry point is [`Supervisor`] (`start` / `stop`). The building
//! blocks it composes are public too, for hosts that drive the protocol by hand.
//!
//! Internal modules:
//! - `gate`: startup rendezvous (readiness flag + condition variable);
//! - `completion`: one-shot completion signal with exit status;
//! - `worker`: spawning, worker state machine, shared handle;
//! - `shutdown`: teardown rendezvous that tolerates an already-exited worker;
//! - `spawn`: thread creation seam;
//! - `supervisor`, `builder`: host-facing `start` / `stop`.

mod builder;
mod completion;
mod config;
mod gate;
mod shutdown;
mod spawn;
mod supervisor;
mod worker;

pub use builder::SupervisorBuilder;
pub use completion::CompletionSignal;
pub use config::{Config, DEFAULT_THREAD_NAME};
pub use gate::StartupGate;
pub use shutdown::{ShutdownCoordinator, ShutdownReport};
pub use spawn::{OsThreads, Spawn, WorkerBody};
pub use supervisor::Supervisor;
pub use worker::{PANIC_EXIT_CODE, WorkerHandle, WorkerLifecycle, WorkerProbe, WorkerState};
