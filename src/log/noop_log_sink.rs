use crate::log::log_sink::LogSink;

#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn write_line(&mut self, _line: &str) {}
}
