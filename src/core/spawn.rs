//! # Thread creation seam.
//!
//! The runtime never calls `std::thread` directly; it asks a [`Spawn`]
//! implementation for a new execution context. [`OsThreads`] is the real
//! scheduler. Other implementations exist mainly to inject creation failures.

use std::io;
use std::thread::{self, JoinHandle};

use crate::core::Config;

/// Body handed to the scheduler; runs once on the new thread.
pub type WorkerBody = Box<dyn FnOnce() + Send + 'static>;

/// Host scheduler able to create a worker thread.
pub trait Spawn: Send + Sync + 'static {
    /// Starts `body` on a new thread configured from `cfg`.
    ///
    /// On error `body` must be dropped without having run.
    fn spawn(&self, cfg: &Config, body: WorkerBody) -> io::Result<JoinHandle<()>>;
}

/// Spawns named OS threads through [`std::thread::Builder`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OsThreads;

impl Spawn for OsThreads {
    fn spawn(&self, cfg: &Config, body: WorkerBody) -> io::Result<JoinHandle<()>> {
        let mut builder = thread::Builder::new().name(cfg.thread_name.clone());
        if let Some(size) = cfg.stack_size_opt() {
            builder = builder.stack_size(size);
        }
        builder.spawn(body)
    }
}
