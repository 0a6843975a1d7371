use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

use crate::{PoolError, Result};

/// A bounded, thread-safe FIFO queue.
///
/// Producers block in [`put`](TaskQueue::put) while the queue is full and
/// consumers block in [`take`](TaskQueue::take) while it is empty, standard
/// bounded-buffer discipline. Closing the queue wakes every blocked waiter
/// and makes both operations fail; elements still queued at that point are
/// abandoned.
pub struct TaskQueue<T> {
    inner: Mutex<Inner<T>>,
    not_empty: Condvar,
    not_full: Condvar,
}

struct Inner<T> {
    items: VecDeque<T>,
    capacity: usize,
    closed: bool,
}

impl<T> TaskQueue<T> {
    /// Creates an empty queue holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        TaskQueue {
            inner: Mutex::new(Inner {
                items: VecDeque::with_capacity(capacity),
                capacity,
                closed: false,
            }),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
        }
    }

    /// Inserts `item` at the tail, blocking while the queue is full.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::QueueClosed`] if the queue is closed before or
    /// while waiting for a slot; the item is not enqueued in that case.
    pub fn put(&self, item: T) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        loop {
            if inner.closed {
                return Err(PoolError::QueueClosed);
            }
            if inner.items.len() < inner.capacity {
                inner.items.push_back(item);
                self.not_empty.notify_one();
                return Ok(());
            }
            inner = self.not_full.wait(inner).unwrap();
        }
    }

    /// Removes and returns the head element, blocking while the queue is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::QueueClosed`] if the queue is closed, even when
    /// elements remain queued; no element is removed in that case.
    pub fn take(&self) -> Result<T> {
        let mut inner = self.inner.lock().unwrap();
        loop {
            if inner.closed {
                return Err(PoolError::QueueClosed);
            }
            if let Some(item) = inner.items.pop_front() {
                self.not_full.notify_one();
                return Ok(item);
            }
            inner = self.not_empty.wait(inner).unwrap();
        }
    }

    /// Closes the queue, waking all blocked producers and consumers.
    ///
    /// Idempotent. Elements still queued are never handed out after this.
    pub fn close(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.closed = true;
        drop(inner);
        self.not_empty.notify_all();
        self.not_full.notify_all();
    }

    /// Returns the number of elements currently queued.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().items.len()
    }

    /// Returns `true` if no elements are queued.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().items.is_empty()
    }

    /// Returns `true` if the queue is at capacity.
    pub fn is_full(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.items.len() == inner.capacity
    }

    /// Returns the fixed capacity the queue was created with.
    pub fn capacity(&self) -> usize {
        self.inner.lock().unwrap().capacity
    }

    /// Returns `true` if the queue has been closed.
    pub fn is_closed(&self) -> bool {
        self.inner.lock().unwrap().closed
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use super::TaskQueue;
    use crate::PoolError;

    #[test]
    fn fifo_order() {
        let queue = TaskQueue::new(10);
        for i in 0..10 {
            queue.put(i).unwrap();
        }
        for i in 0..10 {
            assert_eq!(queue.take().unwrap(), i);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn len_tracks_contents() {
        let queue = TaskQueue::new(3);
        assert_eq!(queue.len(), 0);
        queue.put('a').unwrap();
        queue.put('b').unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.capacity(), 3);
        queue.take().unwrap();
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn put_blocks_until_take_frees_a_slot() {
        let queue = Arc::new(TaskQueue::new(1));
        queue.put(0).unwrap();
        assert!(queue.is_full());

        let inserted = Arc::new(AtomicBool::new(false));
        let producer = {
            let queue = Arc::clone(&queue);
            let inserted = Arc::clone(&inserted);
            thread::spawn(move || {
                queue.put(1).unwrap();
                inserted.store(true, Ordering::SeqCst);
            })
        };

        thread::sleep(Duration::from_millis(50));
        assert!(!inserted.load(Ordering::SeqCst));

        assert_eq!(queue.take().unwrap(), 0);
        producer.join().unwrap();
        assert!(inserted.load(Ordering::SeqCst));
        assert_eq!(queue.take().unwrap(), 1);
    }

    #[test]
    fn close_wakes_blocked_take() {
        let queue: Arc<TaskQueue<u32>> = Arc::new(TaskQueue::new(1));
        let consumer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.take())
        };

        thread::sleep(Duration::from_millis(50));
        queue.close();

        let result = consumer.join().unwrap();
        assert!(matches!(result, Err(PoolError::QueueClosed)));
    }

    #[test]
    fn close_abandons_queued_items() {
        let queue = TaskQueue::new(5);
        queue.put(1).unwrap();
        queue.put(2).unwrap();
        queue.close();

        assert!(queue.is_closed());
        assert!(matches!(queue.take(), Err(PoolError::QueueClosed)));
        assert!(matches!(queue.put(3), Err(PoolError::QueueClosed)));
        // The abandoned items are still there, just unreachable.
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn close_is_idempotent() {
        let queue: TaskQueue<()> = TaskQueue::new(1);
        queue.close();
        queue.close();
        assert!(queue.is_closed());
    }
}
