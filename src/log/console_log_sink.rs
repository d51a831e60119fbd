use std::io::{self, Write};

use crate::log::log_sink::LogSink;

/// Writes every line to standard output.
#[derive(Debug, Clone, Default)]
pub struct ConsoleLogSink;

impl LogSink for ConsoleLogSink {
    fn write_line(&mut self, line: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }

    fn flush(&mut self) {
        let _ = io::stdout().flush();
    }
}
