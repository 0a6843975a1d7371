use std::sync::Arc;

use log::{debug, warn};

use crate::queue::TaskQueue;
use crate::worker::Worker;
use crate::{PoolError, Result};

/// Number of worker threads used when none is configured.
pub const DEFAULT_WORKERS: usize = 5;

/// Task queue capacity used when none is configured.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// A unit of work submitted to the pool.
///
/// Tasks are fire-and-forget: the submitter gets no result and no error
/// channel. Callers needing either should have the closure write into a
/// channel or shared cell of their own.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Configuration for a [`WorkerPool`].
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Number of worker threads.
    pub workers: usize,
    /// Capacity of the shared task queue.
    pub queue_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            workers: DEFAULT_WORKERS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl PoolConfig {
    /// Creates a configuration from explicit values.
    ///
    /// A zero worker count or queue capacity is invalid and falls back to
    /// the corresponding default ([`DEFAULT_WORKERS`],
    /// [`DEFAULT_QUEUE_CAPACITY`]); the correction is logged.
    pub fn new(workers: usize, queue_capacity: usize) -> Self {
        let workers = if workers == 0 {
            warn!("Invalid worker count 0, falling back to {DEFAULT_WORKERS}");
            DEFAULT_WORKERS
        } else {
            workers
        };
        let queue_capacity = if queue_capacity == 0 {
            warn!("Invalid queue capacity 0, falling back to {DEFAULT_QUEUE_CAPACITY}");
            DEFAULT_QUEUE_CAPACITY
        } else {
            queue_capacity
        };
        PoolConfig {
            workers,
            queue_capacity,
        }
    }
}

/// A fixed-size thread pool over a bounded task queue.
///
/// The pool owns a [`TaskQueue`] and a fixed set of worker threads created
/// up front. [`execute`](WorkerPool::execute) enqueues work, blocking the
/// caller while the queue is full; each worker loops dequeuing and running
/// tasks until [`destroy`](WorkerPool::destroy) is called. Tasks still
/// queued at destroy time are abandoned, not executed.
pub struct WorkerPool {
    queue: Arc<TaskQueue<Task>>,
    workers: Vec<Worker>,
}

impl WorkerPool {
    /// Creates a pool with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a worker thread cannot be spawned.
    pub fn new() -> Result<Self> {
        Self::with_config(PoolConfig::default())
    }

    /// Creates a pool with the given configuration.
    ///
    /// All workers are spawned before this returns, but they start pulling
    /// from the queue asynchronously.
    ///
    /// # Errors
    ///
    /// Returns an error if a worker thread cannot be spawned; workers
    /// spawned up to that point are stopped and joined.
    pub fn with_config(config: PoolConfig) -> Result<Self> {
        let queue = Arc::new(TaskQueue::new(config.queue_capacity));
        let mut workers = Vec::with_capacity(config.workers);

        debug!(
            "Starting worker pool: {} workers, queue capacity {}",
            config.workers, config.queue_capacity
        );

        for id in 0..config.workers {
            match Worker::spawn(id, Arc::clone(&queue)) {
                Ok(worker) => workers.push(worker),
                Err(e) => {
                    for worker in &workers {
                        worker.stop();
                    }
                    queue.close();
                    for worker in workers.drain(..) {
                        worker.join();
                    }
                    return Err(e);
                }
            }
        }

        Ok(WorkerPool { queue, workers })
    }

    /// Submits a task to the pool.
    ///
    /// Blocks while the queue is full, resuming once a worker frees a slot.
    /// There is no way to observe whether or when the task ran.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::PoolShutDown`] if the pool has been destroyed.
    pub fn execute<F>(&self, job: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.queue
            .put(Box::new(job))
            .map_err(|_| PoolError::PoolShutDown)
    }

    /// Shuts the pool down.
    ///
    /// Signals every worker to stop, closes the queue, and joins the worker
    /// threads. A worker mid-task finishes that task first; tasks still
    /// queued are never executed. Idempotent: repeated calls return
    /// immediately.
    pub fn destroy(&mut self) {
        if self.workers.is_empty() {
            return;
        }
        debug!("Shutting down worker pool");
        for worker in &self.workers {
            worker.stop();
        }
        self.queue.close();
        for worker in self.workers.drain(..) {
            worker.join();
        }
    }

    /// Returns the number of live workers (zero after [`destroy`](WorkerPool::destroy)).
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.destroy();
    }
}
