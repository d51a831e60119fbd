//! Many-producer, single-consumer FIFO of [`LogTask`]s.
//!
//! Built on an unbounded `std::sync::mpsc` channel: producers never wait on
//! the worker, and the channel's own ordering gives the global FIFO order.
//! A stop request travels through the same channel as a marker, so every
//! task pushed before it is seen by the consumer first. Pushes and the stop
//! request are serialized by a read/write gate: no task can be accepted
//! after the marker has been sent.

use std::sync::{
    Arc, PoisonError, RwLock,
    atomic::{AtomicBool, Ordering},
    mpsc::{self, Receiver, Sender, TryRecvError},
};

use crate::log::{log_error::LogError, log_task::LogTask};

/// Messages carried by the queue.
#[derive(Debug)]
pub enum QueueMsg {
    Task(LogTask),
    Stop,
}

/// Result of [`TaskReceiver::pop_blocking`].
#[derive(Debug, PartialEq)]
pub enum Popped {
    Task(LogTask),
    /// A stop was requested (or every producer is gone) and the queue is empty.
    Stop,
}

/// Creates a connected producer/consumer pair.
#[must_use]
pub fn channel() -> (TaskQueue, TaskReceiver) {
    let (tx, rx) = mpsc::channel();
    let gate = Arc::new(StopGate::default());
    let queue = TaskQueue {
        tx,
        gate: Arc::clone(&gate),
    };
    let receiver = TaskReceiver {
        rx,
        gate,
        draining: false,
    };
    (queue, receiver)
}

/// Stop flag plus the lock ordering pushes against the stop request.
///
/// Pushes hold the read side while they check the flag and send; the stop
/// request holds the write side while it sets the flag and sends the marker.
#[derive(Debug, Default)]
struct StopGate {
    lock: RwLock<()>,
    stopped: AtomicBool,
}

impl StopGate {
    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

/// Producer side of the queue. Cheap to clone, safe to share between threads.
#[derive(Clone, Debug)]
pub struct TaskQueue {
    tx: Sender<QueueMsg>,
    gate: Arc<StopGate>,
}

impl TaskQueue {
    /// Appends a task at the tail.
    ///
    /// # Errors
    ///
    /// - [`LogError::Stopped`] once [`request_stop`](Self::request_stop) was called.
    /// - [`LogError::Disconnected`] when the consumer has been dropped.
    ///
    /// In both cases the task is dropped. `Ok` means the task is ahead of the
    /// stop marker and will be written before the worker stops.
    pub fn push(&self, task: LogTask) -> Result<(), LogError> {
        let _open = self
            .gate
            .lock
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if self.gate.is_stopped() {
            return Err(LogError::Stopped);
        }
        self.tx
            .send(QueueMsg::Task(task))
            .map_err(|_| LogError::Disconnected)
    }

    /// Marks the queue as stopped and wakes the consumer.
    ///
    /// Idempotent; already queued tasks are kept and drained by the consumer.
    pub fn request_stop(&self) {
        let _closing = self
            .gate
            .lock
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if !self.gate.stopped.swap(true, Ordering::AcqRel) {
            // Consumer already gone: nothing left to wake.
            let _ = self.tx.send(QueueMsg::Stop);
        }
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.gate.is_stopped()
    }
}

/// Consumer side of the queue. Exactly one exists per queue.
#[derive(Debug)]
pub struct TaskReceiver {
    rx: Receiver<QueueMsg>,
    gate: Arc<StopGate>,
    draining: bool,
}

impl TaskReceiver {
    /// Removes and returns the head of the queue.
    ///
    /// Blocks while the queue is empty and no stop has been seen. Once the
    /// stop marker arrives the receiver switches to draining: remaining tasks
    /// are returned without blocking, then [`Popped::Stop`].
    pub fn pop_blocking(&mut self) -> Popped {
        if self.draining {
            return self.pop_draining();
        }
        match self.rx.recv() {
            Ok(QueueMsg::Task(task)) => Popped::Task(task),
            Ok(QueueMsg::Stop) => {
                self.draining = true;
                self.pop_draining()
            }
            Err(_) => {
                self.draining = true;
                Popped::Stop
            }
        }
    }

    fn pop_draining(&mut self) -> Popped {
        loop {
            match self.rx.try_recv() {
                Ok(QueueMsg::Task(task)) => return Popped::Task(task),
                Ok(QueueMsg::Stop) => {}
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return Popped::Stop,
            }
        }
    }

    /// Whether a stop was requested, so only the backlog is left to serve.
    ///
    /// True as soon as [`TaskQueue::request_stop`] returns, even while tasks
    /// queued ahead of the stop marker are still pending.
    #[must_use]
    pub fn is_draining(&self) -> bool {
        self.draining || self.gate.is_stopped()
    }
}
