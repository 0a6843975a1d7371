#![deny(missing_docs)]

//! A fixed-size thread pool over a bounded task queue.
//!
//! This library provides a [`WorkerPool`] that owns a bounded FIFO
//! [`TaskQueue`] and a fixed set of worker threads. Submitting a task
//! blocks while the queue is full; workers pull and run tasks until the
//! pool is destroyed. Execution is fire-and-forget: task panics are
//! contained and logged at the worker, never surfaced to the submitter.
//!
//! ```no_run
//! use taskpool::{PoolConfig, WorkerPool};
//!
//! # fn main() -> taskpool::Result<()> {
//! let mut pool = WorkerPool::with_config(PoolConfig::new(3, 50))?;
//! for i in 0..10 {
//!     pool.execute(move || println!("task {i}"))?;
//! }
//! pool.destroy();
//! # Ok(())
//! # }
//! ```

mod error;
mod pool;
mod queue;
mod worker;

pub use error::{PoolError, Result};
pub use pool::{PoolConfig, Task, WorkerPool, DEFAULT_QUEUE_CAPACITY, DEFAULT_WORKERS};
pub use queue::TaskQueue;
