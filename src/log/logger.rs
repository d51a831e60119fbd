use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use crate::{
    config::{Config, LoggerConfig, SinkKind},
    log::{
        console_log_sink::ConsoleLogSink,
        file_log_sink::FileLogSink,
        log_error::LogError,
        log_level::LogLevel,
        log_sink::LogSink,
        log_value::LogValue,
        log_worker::{self, LoggerStats, WorkerShared, WorkerState},
        logger_handle::LoggerHandle,
        noop_log_sink::NoopLogSink,
        task_queue,
    },
};

/// Name given to the background thread.
pub const WORKER_THREAD_NAME: &str = "asynclog-worker";

/// Asynchronous logger owning one background worker thread.
///
/// Callers submit tasks through the logger or any [`LoggerHandle`] cloned
/// from it; the worker formats each task and writes it to the sink in the
/// order the tasks were queued.
///
/// # Architecture
///
/// 1. **Producers**: any thread calls the level methods on a `LoggerHandle`.
/// 2. **Queue**: an unbounded channel holds pending tasks, FIFO across all producers.
/// 3. **Consumer**: the worker thread formats tasks and owns the sink.
///
/// # Shutdown
///
/// [`stop`](Self::stop) closes the queue to new tasks; [`shutdown`](Self::shutdown)
/// (and `Drop`) additionally waits until the worker has drained the backlog.
/// A normal shutdown therefore loses no queued line.
///
/// One instance is meant to be created by the application's entry point and
/// its handles passed to whoever needs to log.
pub struct Logger {
    handle: LoggerHandle,
    shared: Arc<WorkerShared>,
    worker: Option<JoinHandle<()>>,
}

impl Logger {
    /// Spawns the worker thread writing into `sink`.
    ///
    /// # Errors
    /// [`LogError::Spawn`] if the thread cannot be created.
    pub fn start<S: LogSink + 'static>(sink: S) -> Result<Self, LogError> {
        let (queue, rx) = task_queue::channel();
        let shared = Arc::new(WorkerShared::default());

        let worker_shared = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name(WORKER_THREAD_NAME.into())
            .spawn(move || log_worker::run(rx, sink, worker_shared))
            .map_err(LogError::Spawn)?;

        Ok(Self {
            handle: LoggerHandle { queue },
            shared,
            worker: Some(worker),
        })
    }

    /// Starts a logger with the sink selected by the `[Logging]` section.
    ///
    /// # Errors
    /// [`LogError::Config`] for invalid settings, [`LogError::Spawn`] as in [`start`](Self::start).
    pub fn from_config(config: &Config) -> Result<Self, LogError> {
        let settings = LoggerConfig::from_config(config)?;
        Self::start(sink_for(&settings))
    }

    /// Returns a cloneable handle for other modules or threads.
    #[must_use]
    pub fn handle(&self) -> LoggerHandle {
        self.handle.clone()
    }

    #[inline]
    pub fn submit(&self, level: LogLevel, values: Vec<LogValue>) {
        self.handle.submit(level, values);
    }

    #[inline]
    pub fn debug(&self, values: Vec<LogValue>) {
        self.handle.debug(values);
    }

    #[inline]
    pub fn info(&self, values: Vec<LogValue>) {
        self.handle.info(values);
    }

    #[inline]
    pub fn warn(&self, values: Vec<LogValue>) {
        self.handle.warn(values);
    }

    #[inline]
    pub fn error(&self, values: Vec<LogValue>) {
        self.handle.error(values);
    }

    /// Stops accepting tasks. Idempotent; queued tasks are still written.
    pub fn stop(&self) {
        self.handle.queue.request_stop();
    }

    /// Stops the logger and blocks until the worker has drained the queue.
    #[must_use = "returns the final counters"]
    pub fn shutdown(mut self) -> LoggerStats {
        self.stop_and_join();
        self.shared.stats()
    }

    #[must_use]
    pub fn state(&self) -> WorkerState {
        self.shared.state()
    }

    #[must_use]
    pub fn stats(&self) -> LoggerStats {
        self.shared.stats()
    }

    fn stop_and_join(&mut self) {
        self.stop();
        if let Some(worker) = self.worker.take() {
            // A panicking sink already lost its lines; nothing to recover here.
            let _ = worker.join();
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

fn sink_for(settings: &LoggerConfig) -> Box<dyn LogSink> {
    match settings.sink {
        SinkKind::Console => Box::new(ConsoleLogSink),
        SinkKind::None => Box::new(NoopLogSink),
        SinkKind::File => {
            let name = settings.log_filename.as_deref();
            Box::new(match &settings.log_path {
                Some(dir) => FileLogSink::in_dir(dir, name, settings.flush_every),
                None => FileLogSink::next_to_exe(name, settings.flush_every),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::memory_log_sink::MemoryLogSink;
    use crate::values;

    #[test]
    fn writes_in_submission_order() {
        let sink = MemoryLogSink::new();
        let logger = Logger::start(sink.clone()).unwrap();

        logger.info(values!["hello"]);
        logger.warn(values!["{} plus {} is {}", 1, 2, 3]);
        logger.error(values!["{}", "x", "y"]);
        logger.debug(values![]);

        let stats = logger.shutdown();
        assert_eq!(
            sink.lines(),
            vec![
                "[INFOS]:hello".to_owned(),
                "[WARNS]:1 plus 2 is 3".to_owned(),
                "[ERROR]:x y".to_owned(),
                "[DEBUG]:".to_owned(),
            ]
        );
        assert_eq!(stats, LoggerStats { written: 4, dropped: 0 });
    }

    #[test]
    fn stop_is_idempotent_and_rejects_late_tasks() {
        let sink = MemoryLogSink::new();
        let logger = Logger::start(sink.clone()).unwrap();
        let handle = logger.handle();

        handle.info(values!["before"]);
        logger.stop();
        logger.stop();
        assert!(matches!(
            handle.try_submit(LogLevel::Info, values!["after"]),
            Err(LogError::Stopped)
        ));

        let _ = logger.shutdown();
        assert_eq!(sink.lines(), vec!["[INFOS]:before".to_owned()]);
    }

    #[test]
    fn drop_drains_queue() {
        let sink = MemoryLogSink::new();
        {
            let logger = Logger::start(sink.clone()).unwrap();
            for n in 0..100 {
                logger.info(values!["n={}", n]);
            }
        }
        assert_eq!(sink.len(), 100);
        assert_eq!(sink.lines()[99], "[INFOS]:n=99");
    }

    #[test]
    fn state_reaches_stopped() {
        let logger = Logger::start(NoopLogSink).unwrap();
        let shared = Arc::clone(&logger.shared);
        let _ = logger.shutdown();
        assert_eq!(shared.state(), WorkerState::Stopped);
    }

    #[test]
    fn from_config_rejects_bad_sink() {
        let config = Config::parse("[Logging]\nsink = carrier-pigeon\n");
        assert!(matches!(
            Logger::from_config(&config),
            Err(LogError::Config(_))
        ));
    }

    #[test]
    fn from_config_with_none_sink() {
        let config = Config::parse("[Logging]\nsink = none\n");
        let logger = Logger::from_config(&config).unwrap();
        logger.info(values!["discarded"]);
        assert_eq!(logger.shutdown(), LoggerStats { written: 1, dropped: 0 });
    }
}
