//! The single consumer of the task queue.
//!
//! ```text
//! WAITING ──task──▶ PROCESSING ──▶ WAITING
//!    │                   │
//!    │ stop, empty       │ stop requested, backlog left
//!    ▼                   ▼
//! STOPPED ◀──empty── DRAINING
//! ```

use std::sync::{
    Arc,
    atomic::{AtomicU8, AtomicU64, Ordering},
};

use crate::log::{
    log_formatter::format_task,
    log_sink::LogSink,
    task_queue::{Popped, TaskReceiver},
};

/// Lifecycle of the worker thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum WorkerState {
    /// Blocked waiting for the next task.
    Waiting = 0,
    /// Formatting and writing a task.
    Processing = 1,
    /// Stop requested; writing the remaining backlog without blocking.
    Draining = 2,
    /// Terminal. The thread has returned or is about to.
    Stopped = 3,
}

impl WorkerState {
    const fn from_u8(v: u8) -> Self {
        match v {
            0 => WorkerState::Waiting,
            1 => WorkerState::Processing,
            2 => WorkerState::Draining,
            _ => WorkerState::Stopped,
        }
    }
}

/// Counters kept by the worker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoggerStats {
    /// Lines handed to the sink.
    pub written: u64,
    /// Tasks dropped because their template could not be rendered.
    pub dropped: u64,
}

/// State shared between the worker thread and the facade.
#[derive(Debug)]
pub struct WorkerShared {
    state: AtomicU8,
    written: AtomicU64,
    dropped: AtomicU64,
}

impl Default for WorkerShared {
    fn default() -> Self {
        Self {
            state: AtomicU8::new(WorkerState::Waiting as u8),
            written: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        }
    }
}

impl WorkerShared {
    #[must_use]
    pub fn state(&self) -> WorkerState {
        WorkerState::from_u8(self.state.load(Ordering::Acquire))
    }

    #[must_use]
    pub fn stats(&self) -> LoggerStats {
        LoggerStats {
            written: self.written.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
        }
    }

    fn set_state(&self, state: WorkerState) {
        self.state.store(state as u8, Ordering::Release);
    }
}

/// Runs the worker loop until the queue reports [`Popped::Stop`].
///
/// Takes ownership of the sink; it is flushed and dropped on exit.
pub fn run<S: LogSink>(mut rx: TaskReceiver, mut sink: S, shared: Arc<WorkerShared>) {
    loop {
        let task = match rx.pop_blocking() {
            Popped::Task(task) => task,
            Popped::Stop => break,
        };

        // Once a stop is requested every remaining task is drained work.
        shared.set_state(if rx.is_draining() {
            WorkerState::Draining
        } else {
            WorkerState::Processing
        });
        match format_task(&task) {
            Some(line) => {
                sink.write_line(&line);
                shared.written.fetch_add(1, Ordering::Relaxed);
            }
            None => {
                shared.dropped.fetch_add(1, Ordering::Relaxed);
            }
        }
        drop(task);

        shared.set_state(if rx.is_draining() {
            WorkerState::Draining
        } else {
            WorkerState::Waiting
        });
    }

    sink.flush();
    drop(sink);
    shared.set_state(WorkerState::Stopped);
}
