use std::fmt;

/// Defines the severity levels for log messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Fine-grained events that are mostly useful while debugging.
    Debug,
    /// Informational messages that highlight the progress of the application.
    Info,
    /// Potentially harmful situations.
    Warn,
    /// Error events that might still allow the application to continue running.
    Error,
}

impl LogLevel {
    /// Fixed-width tag written in front of every output line.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "[DEBUG]:",
            LogLevel::Info => "[INFOS]:",
            LogLevel::Warn => "[WARNS]:",
            LogLevel::Error => "[ERROR]:",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<::log::Level> for LogLevel {
    fn from(level: ::log::Level) -> Self {
        match level {
            ::log::Level::Trace | ::log::Level::Debug => LogLevel::Debug,
            ::log::Level::Info => LogLevel::Info,
            ::log::Level::Warn => LogLevel::Warn,
            ::log::Level::Error => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_output_format() {
        assert_eq!(LogLevel::Debug.tag(), "[DEBUG]:");
        assert_eq!(LogLevel::Info.tag(), "[INFOS]:");
        assert_eq!(LogLevel::Warn.tag(), "[WARNS]:");
        assert_eq!(LogLevel::Error.tag(), "[ERROR]:");
        assert_eq!(LogLevel::Warn.to_string(), "[WARNS]:");
    }

    #[test]
    fn trace_folds_into_debug() {
        assert_eq!(LogLevel::from(::log::Level::Trace), LogLevel::Debug);
        assert_eq!(LogLevel::from(::log::Level::Error), LogLevel::Error);
        assert!(LogLevel::Debug < LogLevel::Error);
    }
}
