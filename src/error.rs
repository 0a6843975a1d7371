use std::io;
use thiserror::Error;

/// Error type for pool operations.
#[derive(Error, Debug)]
pub enum PoolError {
    /// The task queue was closed before or while the operation was waiting.
    #[error("Task queue is closed")]
    QueueClosed,

    /// The pool has been destroyed and no longer accepts work.
    #[error("Worker pool is shut down")]
    PoolShutDown,

    /// A worker thread could not be spawned.
    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),
}

/// Result type alias for pool operations.
pub type Result<T> = std::result::Result<T, PoolError>;
