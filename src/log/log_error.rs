use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors produced by the logging pipeline.
///
/// None of these ever reach a caller of the level entry points on
/// [`LoggerHandle`](crate::log::logger_handle::LoggerHandle); they surface
/// only through the `try_*` variants, [`Logger::start`](crate::log::logger::Logger::start)
/// and [`LogBridge::install`](crate::log::log_bridge::LogBridge::install).
#[derive(Debug, Error)]
pub enum LogError {
    /// The value's kind has no textual form.
    #[error("unsupported value kind: {0}")]
    UnsupportedKind(&'static str),
    /// The queue no longer accepts tasks because a stop was requested.
    #[error("logger is stopped, task dropped")]
    Stopped,
    /// The worker side of the queue is gone.
    #[error("logger worker disconnected, task dropped")]
    Disconnected,
    /// The worker thread could not be created.
    #[error("failed to spawn logger worker: {0}")]
    Spawn(#[source] io::Error),
    /// The `[Logging]` configuration is invalid.
    #[error("invalid logger configuration: {0}")]
    Config(#[from] ConfigError),
    /// Another `log` implementation was already registered.
    #[error("failed to install log bridge: {0}")]
    BridgeInstall(#[from] ::log::SetLoggerError),
}
