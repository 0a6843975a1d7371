use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, error};

use crate::pool::Task;
use crate::queue::TaskQueue;
use crate::Result;

/// A single pool-owned worker thread.
///
/// Each worker loops pulling tasks from the shared queue and running them
/// to completion. A panicking task is logged and the loop continues; the
/// worker only exits once its stop flag is set or the queue is closed.
pub(crate) struct Worker {
    name: String,
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl Worker {
    /// Spawns a named worker thread pulling from `queue`.
    pub(crate) fn spawn(id: usize, queue: Arc<TaskQueue<Task>>) -> Result<Worker> {
        let name = format!("worker-{id}");
        let stop = Arc::new(AtomicBool::new(false));

        let handle = {
            let name = name.clone();
            let stop = Arc::clone(&stop);
            thread::Builder::new()
                .name(name.clone())
                .spawn(move || run_loop(&name, &queue, &stop))?
        };

        Ok(Worker { name, stop, handle })
    }

    /// Signals the worker to stop after its current task.
    ///
    /// A worker blocked in `take` only observes this once the queue is
    /// closed; the pool closes the queue right after stopping its workers.
    pub(crate) fn stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    /// Waits for the worker thread to exit.
    pub(crate) fn join(self) {
        if self.handle.join().is_err() {
            error!("Worker {} thread panicked", self.name);
        }
    }
}

fn run_loop(name: &str, queue: &TaskQueue<Task>, stop: &AtomicBool) {
    while !stop.load(Ordering::Acquire) {
        match queue.take() {
            Ok(task) => {
                debug!("{name} executing task");
                // Catch panics so the worker loop continues
                if panic::catch_unwind(AssertUnwindSafe(task)).is_err() {
                    error!("{name}: task panicked, continuing");
                }
            }
            Err(_) => {
                debug!("{name}: queue closed, shutting down");
                break;
            }
        }
    }
}
