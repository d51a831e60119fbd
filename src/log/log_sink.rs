/// Destination for finished log lines.
///
/// A sink is owned by the worker thread and only ever touched from there, so
/// it takes `&mut self` and needs no locking. I/O failures are the sink's own
/// business; nothing is reported back to the worker.
pub trait LogSink: Send {
    /// Writes one line. The sink adds the line terminator.
    fn write_line(&mut self, line: &str);

    /// Pushes out anything buffered. Called when the worker stops.
    fn flush(&mut self) {}
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}
