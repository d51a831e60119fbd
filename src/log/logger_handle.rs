use crate::log::{
    log_error::LogError, log_level::LogLevel, log_task::LogTask, log_value::LogValue,
    task_queue::TaskQueue,
};

/// Lightweight, cloneable handle to a running [`Logger`](crate::log::logger::Logger).
///
/// Each call builds a [`LogTask`] and pushes it onto the queue; the only
/// wait is the queue's internal send. The level methods never fail: once the
/// logger is stopped, tasks are silently dropped.
///
/// # Examples
/// ```ignore
/// let handle = logger.handle();
/// handle.info(values!["listening on {}:{}", host, port]);
/// ```
#[derive(Clone, Debug)]
pub struct LoggerHandle {
    pub(super) queue: TaskQueue,
}

impl LoggerHandle {
    /// Queues a task and reports whether it was accepted.
    ///
    /// An accepted task is always written before the worker stops, even when
    /// [`Logger::stop`](crate::log::logger::Logger::stop) runs concurrently.
    ///
    /// # Errors
    /// - [`LogError::Stopped`] after the logger was asked to stop.
    /// - [`LogError::Disconnected`] when the worker is gone.
    pub fn try_submit(&self, level: LogLevel, values: Vec<LogValue>) -> Result<(), LogError> {
        self.queue.push(LogTask::new(level, values))
    }

    /// Queues a task, ignoring failures.
    #[inline]
    pub fn submit(&self, level: LogLevel, values: Vec<LogValue>) {
        let _ = self.try_submit(level, values);
    }

    #[inline]
    pub fn debug(&self, values: Vec<LogValue>) {
        self.submit(LogLevel::Debug, values);
    }

    #[inline]
    pub fn info(&self, values: Vec<LogValue>) {
        self.submit(LogLevel::Info, values);
    }

    #[inline]
    pub fn warn(&self, values: Vec<LogValue>) {
        self.submit(LogLevel::Warn, values);
    }

    #[inline]
    pub fn error(&self, values: Vec<LogValue>) {
        self.submit(LogLevel::Error, values);
    }

    /// Whether the logger stopped accepting tasks.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.queue.is_stopped()
    }
}
