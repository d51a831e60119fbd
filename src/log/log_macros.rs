//! Leveled logging macros for [`Logger`](crate::log::logger::Logger) and
//! [`LoggerHandle`](crate::log::logger_handle::LoggerHandle).
//!
//! Every argument goes through `LogValue::from`, so any mix of integers,
//! floats and strings can be passed; the first one is the template.
//!
//! ```ignore
//! async_info!(handle, "{} of {} done", done, total);
//! async_error!(handle, "write failed:", err.to_string());
//! ```

/// Builds a `Vec<LogValue>` from any number of convertible expressions.
#[macro_export]
macro_rules! values {
    ($($v:expr),* $(,)?) => {{
        let __values: ::std::vec::Vec<$crate::log::log_value::LogValue> =
            ::std::vec![$($crate::log::log_value::LogValue::from($v)),*];
        __values
    }};
}

#[macro_export]
macro_rules! async_log {
    ($logger:expr, $lvl:expr $(, $v:expr)* $(,)?) => {{
        $logger.submit($lvl, $crate::values![$($v),*]);
    }};
}

#[macro_export]
macro_rules! async_debug { ($logger:expr $(, $v:expr)* $(,)?) => { $crate::async_log!($logger, $crate::log::log_level::LogLevel::Debug $(, $v)*) } }
#[macro_export]
macro_rules! async_info  { ($logger:expr $(, $v:expr)* $(,)?) => { $crate::async_log!($logger, $crate::log::log_level::LogLevel::Info $(, $v)*) } }
#[macro_export]
macro_rules! async_warn  { ($logger:expr $(, $v:expr)* $(,)?) => { $crate::async_log!($logger, $crate::log::log_level::LogLevel::Warn $(, $v)*) } }
#[macro_export]
macro_rules! async_error { ($logger:expr $(, $v:expr)* $(,)?) => { $crate::async_log!($logger, $crate::log::log_level::LogLevel::Error $(, $v)*) } }
