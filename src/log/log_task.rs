use crate::log::{log_level::LogLevel, log_value::LogValue};

/// One logging call: a severity plus its arguments in call order.
///
/// When more than one value is present the first one is the format template.
/// Tasks are moved into the queue and on to the worker; they are never copied.
#[derive(Debug, PartialEq)]
pub struct LogTask {
    level: LogLevel,
    values: Vec<LogValue>,
}

impl LogTask {
    #[must_use]
    pub fn new(level: LogLevel, values: Vec<LogValue>) -> Self {
        Self { level, values }
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[must_use]
    pub fn values(&self) -> &[LogValue] {
        &self.values
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    #[test]
    fn keeps_argument_order() {
        let task = LogTask::new(LogLevel::Warn, values!["{} then {}", 1, "two"]);
        assert_eq!(task.level(), LogLevel::Warn);
        assert_eq!(
            task.values(),
            &[
                LogValue::Text("{} then {}".to_owned()),
                LogValue::Int(1),
                LogValue::Text("two".to_owned()),
            ]
        );
    }

    #[test]
    fn empty_task() {
        let task = LogTask::new(LogLevel::Info, values![]);
        assert!(task.is_empty());
    }
}
