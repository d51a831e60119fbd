pub mod console_log_sink;
pub mod file_log_sink;
pub mod log_bridge;
pub mod log_error;
pub mod log_formatter;
pub mod log_level;
pub mod log_macros;
pub mod log_sink;
pub mod log_task;
pub mod log_value;
pub mod log_worker;
pub mod logger;
pub mod logger_handle;
pub mod memory_log_sink;
pub mod noop_log_sink;
pub mod task_queue;

pub use console_log_sink::ConsoleLogSink;
pub use file_log_sink::FileLogSink;
pub use log_error::LogError;
pub use log_level::LogLevel;
pub use log_sink::LogSink;
pub use log_value::LogValue;
pub use logger::Logger;
pub use logger_handle::LoggerHandle;
pub use memory_log_sink::MemoryLogSink;
pub use noop_log_sink::NoopLogSink;
