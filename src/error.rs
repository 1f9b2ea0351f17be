//! Error types used by the workgate runtime.
//!
//! Only worker creation can fail in a way the caller can act on. The
//! rendezvous operations (`await_ready`, `shutdown`) never fail: they either
//! make progress or block until the worker reaches the state they wait for.
//!
//! [`RuntimeError`] provides helper methods (`as_label`, `as_message`) for logging/metrics.

use thiserror::Error;

/// # Errors produced by the workgate runtime.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// The host scheduler refused to create the worker thread.
    ///
    /// No partial state is left behind: there is no handle and nobody is
    /// blocked on the startup gate.
    #[error("failed to spawn worker {name:?}: {source}")]
    SpawnFailed {
        /// Name the worker thread would have carried.
        name: String,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// `start()` was called while a previously started worker is still held.
    #[error("worker {name:?} already started")]
    AlreadyStarted {
        /// Name of the worker that is still held.
        name: String,
    },
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use workgate::RuntimeError;
    ///
    /// let err = RuntimeError::AlreadyStarted { name: "wqdemod".into() };
    /// assert_eq!(err.as_label(), "runtime_already_started");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::SpawnFailed { .. } => "runtime_spawn_failed",
            RuntimeError::AlreadyStarted { .. } => "runtime_already_started",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RuntimeError::SpawnFailed { name, source } => {
                format!("spawn of {name} failed: {source}")
            }
            RuntimeError::AlreadyStarted { name } => {
                format!("{name} is already running")
            }
        }
    }

    /// Returns true if this is a worker creation failure.
    #[inline]
    pub fn is_spawn_failed(&self) -> bool {
        matches!(self, RuntimeError::SpawnFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_failed_keeps_source() {
        let err = RuntimeError::SpawnFailed {
            name: "w".into(),
            source: std::io::Error::new(std::io::ErrorKind::OutOfMemory, "no threads left"),
        };
        assert!(err.is_spawn_failed());
        assert_eq!(err.as_label(), "runtime_spawn_failed");
        assert!(err.to_string().contains("no threads left"));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.as_message(), "spawn of w failed: no threads left");
    }

    #[test]
    fn already_started_message_names_the_worker() {
        let err = RuntimeError::AlreadyStarted { name: "wqdemod".into() };
        assert!(!err.is_spawn_failed());
        assert_eq!(err.as_message(), "wqdemod is already running");
    }
}
