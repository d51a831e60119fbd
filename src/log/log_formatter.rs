//! Turns a [`LogTask`] into its output line.
//!
//! The first value is the template. Each following value replaces the next
//! `{}` to the right of the previous substitution, or is appended after a
//! single space once no placeholder is left. The scan only moves forward, so
//! text that was inserted is never searched again.

use crate::log::{log_task::LogTask, log_value::LogValue};

/// Placeholder token replaced positionally.
pub const PLACEHOLDER: &str = "{}";

/// Formats a task into a full line, level tag included.
///
/// Returns `None` when the template value cannot be rendered; the task then
/// produces no output at all. A task without values yields the bare tag.
#[must_use]
pub fn format_task(task: &LogTask) -> Option<String> {
    let tag = task.level().tag();
    let Some((head, args)) = task.values().split_first() else {
        return Some(tag.to_owned());
    };

    let template = head.render().ok()?;
    let body = substitute(template, args);

    let mut line = String::with_capacity(tag.len() + body.len());
    line.push_str(tag);
    line.push_str(&body);
    Some(line)
}

/// Substitutes `args` into `template`.
///
/// Arguments that fail to render are skipped and leave the template as it is.
#[must_use]
pub fn substitute(template: String, args: &[LogValue]) -> String {
    let mut out = template;
    let mut pos = 0;

    for arg in args {
        let Ok(text) = arg.render() else {
            continue;
        };

        match out[pos..].find(PLACEHOLDER) {
            Some(offset) => {
                let at = pos + offset;
                out.replace_range(at..at + PLACEHOLDER.len(), &text);
                pos = at + text.len();
            }
            None => {
                out.push(' ');
                out.push_str(&text);
                pos = out.len();
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::log_level::LogLevel;
    use crate::values;

    fn fmt(level: LogLevel, values: Vec<LogValue>) -> Option<String> {
        format_task(&LogTask::new(level, values))
    }

    #[test]
    fn empty_task_is_bare_tag() {
        assert_eq!(fmt(LogLevel::Error, values![]).unwrap(), "[ERROR]:");
    }

    #[test]
    fn single_cell_is_not_processed() {
        assert_eq!(fmt(LogLevel::Info, values!["hello"]).unwrap(), "[INFOS]:hello");
        assert_eq!(fmt(LogLevel::Info, values!["a {} b"]).unwrap(), "[INFOS]:a {} b");
    }

    #[test]
    fn positional_substitution() {
        let line = fmt(LogLevel::Debug, values!["{} plus {} is {}", 1, 2, 3]).unwrap();
        assert_eq!(line, "[DEBUG]:1 plus 2 is 3");
    }

    #[test]
    fn overflow_appends_with_space() {
        let line = fmt(LogLevel::Warn, values!["{}", "x", "y"]).unwrap();
        assert_eq!(line, "[WARNS]:x y");
    }

    #[test]
    fn non_string_template_gets_args_appended() {
        let line = fmt(LogLevel::Info, values![42, 1.5, "end"]).unwrap();
        assert_eq!(line, "[INFOS]:42 1.5 end");
    }

    #[test]
    fn inserted_placeholders_are_not_rescanned() {
        let out = substitute("{} and {}".to_owned(), &values!["{}", "b"]);
        assert_eq!(out, "{} and b");

        let out = substitute("{}".to_owned(), &values!["x", "{}", "y"]);
        assert_eq!(out, "x {} y");
    }

    #[test]
    fn unsupported_template_drops_task() {
        let task = LogTask::new(
            LogLevel::Error,
            vec![LogValue::unsupported::<()>(), LogValue::from(1)],
        );
        assert!(format_task(&task).is_none());
    }

    #[test]
    fn unsupported_argument_is_skipped() {
        let args = vec![
            LogValue::from(1),
            LogValue::unsupported::<()>(),
            LogValue::from(3),
        ];
        let out = substitute("{}-{}-{}".to_owned(), &args);
        assert_eq!(out, "1-3-{}");
    }

    #[test]
    fn unused_placeholders_stay() {
        let out = substitute("{} of {}".to_owned(), &values![5]);
        assert_eq!(out, "5 of {}");
    }
}
