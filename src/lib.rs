//! asynclog is an asynchronous logger for multi-threaded programs.
//!
//! Callers hand a severity plus a list of values to a [`LoggerHandle`]; a
//! single background thread formats each call, substituting `{}`
//! placeholders in the first value with the following ones, and writes one
//! line per call to a [`LogSink`]. Producers only pay for an enqueue.
//!
//! ```ignore
//! use asynclog::{async_info, log::{Logger, ConsoleLogSink}};
//!
//! let logger = Logger::start(ConsoleLogSink)?;
//! let handle = logger.handle();
//! async_info!(handle, "{} plus {} is {}", 1, 2, 3); // [INFOS]:1 plus 2 is 3
//! let stats = logger.shutdown();
//! ```
//!
//! [`LoggerHandle`]: log::LoggerHandle
//! [`LogSink`]: log::LogSink

/// Handles configuration loading and management.
pub mod config;
/// Queue, formatter, worker and sinks of the logger.
pub mod log;
