//! # Runtime configuration.
//!
//! Provides [`Config`] centralized settings for the supervisor runtime.
//!
//! ## Sentinel values
//! - `stack_size = 0` → platform default stack size for the worker thread

use std::time::Duration;

/// Default name given to the worker thread.
pub const DEFAULT_THREAD_NAME: &str = "wqdemod";

/// Global configuration for the supervisor runtime.
///
/// ## Field semantics
/// - `thread_name`: OS name of the worker thread, also used in diagnostics
/// - `stack_size`: worker stack size in bytes (`0` = platform default)
/// - `work`: duration of the default [`BoundedSleep`](crate::BoundedSleep) task
#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the worker thread.
    pub thread_name: String,

    /// Worker stack size in bytes.
    ///
    /// - `0` = let the platform decide
    /// - `n > 0` = request exactly `n` bytes
    pub stack_size: usize,

    /// How long the default task sleeps before exiting.
    ///
    /// Ignored when a custom task is installed with
    /// [`SupervisorBuilder::with_task`](crate::SupervisorBuilder::with_task).
    pub work: Duration,
}

impl Config {
    /// Returns the requested stack size as an `Option`.
    ///
    /// - `None` → platform default
    /// - `Some(n)` → `n` bytes
    #[inline]
    pub fn stack_size_opt(&self) -> Option<usize> {
        if self.stack_size == 0 {
            None
        } else {
            Some(self.stack_size)
        }
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `thread_name = "wqdemod"`
    /// - `stack_size = 0` (platform default)
    /// - `work = 10s`
    fn default() -> Self {
        Self {
            thread_name: DEFAULT_THREAD_NAME.to_string(),
            stack_size: 0,
            work: Duration::from_secs(10),
        }
    }
}
