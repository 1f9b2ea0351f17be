use std::sync::Arc;

use crate::{
    core::{Config, OsThreads, Spawn, Supervisor},
    subscribers::{Subscribe, SubscriberSet},
    tasks::{BoundedSleep, TaskRef},
};

/// Builder for constructing a [`Supervisor`] with optional pieces.
pub struct SupervisorBuilder {
    cfg: Config,
    subscribers: Vec<Arc<dyn Subscribe>>,
    task: Option<TaskRef>,
    spawner: Option<Arc<dyn Spawn>>,
}

impl SupervisorBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
            task: None,
            spawner: None,
        }
    }

    /// Sets event subscribers for diagnostics.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Sets the task the worker runs.
    ///
    /// Without it the worker runs [`BoundedSleep`] for [`Config::work`].
    pub fn with_task(mut self, task: TaskRef) -> Self {
        self.task = Some(task);
        self
    }

    /// Replaces the thread scheduler (default: [`OsThreads`]).
    pub fn with_spawner(mut self, spawner: Arc<dyn Spawn>) -> Self {
        self.spawner = Some(spawner);
        self
    }

    /// Builds the supervisor. No thread is created until [`Supervisor::start`].
    pub fn build(self) -> Supervisor {
        let task: TaskRef = match self.task {
            Some(task) => task,
            None => Arc::new(BoundedSleep::new(self.cfg.work)),
        };
        let spawner: Arc<dyn Spawn> = match self.spawner {
            Some(spawner) => spawner,
            None => Arc::new(OsThreads),
        };
        Supervisor::new_internal(
            self.cfg,
            task,
            SubscriberSet::new(self.subscribers),
            spawner,
        )
    }
}
