use std::sync::{Arc, Mutex, PoisonError};

use crate::log::log_sink::LogSink;

/// Keeps every line in memory.
///
/// Clones share the same buffer, so one clone can be handed to the logger
/// while another is kept to read the lines back.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryLogSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far, in write order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemoryLogSink {
    fn write_line(&mut self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_buffer() {
        let reader = MemoryLogSink::new();
        let mut writer = reader.clone();
        writer.write_line("a");
        writer.write_line("b");
        assert_eq!(reader.lines(), vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(reader.len(), 2);
    }
}
