//! Routes records from the `log` crate macros into a [`Logger`](crate::log::logger::Logger).
//!
//! The record is already formatted by `log`, so it is queued as a single text
//! value and no placeholder processing happens on it.

use ::log::{LevelFilter, Log, Metadata, Record};

use crate::log::{
    log_error::LogError, log_level::LogLevel, log_value::LogValue, logger_handle::LoggerHandle,
};

pub struct LogBridge {
    handle: LoggerHandle,
    max_level: LevelFilter,
}

impl LogBridge {
    #[must_use]
    pub fn new(handle: LoggerHandle, max_level: LevelFilter) -> Self {
        Self { handle, max_level }
    }

    /// Registers the bridge as the process-wide `log` implementation.
    ///
    /// # Errors
    /// [`LogError::BridgeInstall`] if a logger was already set.
    pub fn install(handle: LoggerHandle, max_level: LevelFilter) -> Result<(), LogError> {
        ::log::set_boxed_logger(Box::new(Self::new(handle, max_level)))?;
        ::log::set_max_level(max_level);
        Ok(())
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.handle.submit(
            LogLevel::from(record.level()),
            vec![LogValue::Text(record.args().to_string())],
        );
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::task_queue::{self, Popped};

    #[test]
    fn forwards_enabled_records_as_single_text() {
        let (queue, mut rx) = task_queue::channel();
        let bridge = LogBridge::new(LoggerHandle { queue }, LevelFilter::Info);

        bridge.log(
            &Record::builder()
                .level(::log::Level::Debug)
                .args(format_args!("filtered"))
                .build(),
        );
        bridge.log(
            &Record::builder()
                .level(::log::Level::Warn)
                .args(format_args!("disk at {}% {{}}", 93))
                .build(),
        );

        match rx.pop_blocking() {
            Popped::Task(task) => {
                assert_eq!(task.level(), LogLevel::Warn);
                assert_eq!(task.values(), &[LogValue::Text("disk at 93% {}".to_owned())]);
            }
            Popped::Stop => panic!("expected the warn record"),
        }
    }
}
