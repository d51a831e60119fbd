//! Loggable values.
//!
//! Every argument handed to the logger is converted into a [`LogValue`] at the
//! call site, before the task is queued. Values cross the thread boundary by
//! move and are only ever read afterwards.

use std::borrow::Cow;

use crate::log::log_error::LogError;

/// A single loggable value.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// Text.
    Text(String),
    /// A value of a type with no textual form, tagged with its type name.
    Unsupported(&'static str),
}

impl LogValue {
    /// Wraps a value of type `T` that the logger cannot render.
    ///
    /// Rendering such a value fails; as a template it drops the whole task,
    /// as an argument it is skipped.
    #[must_use]
    pub fn unsupported<T: ?Sized>() -> Self {
        LogValue::Unsupported(std::any::type_name::<T>())
    }

    /// Renders the value as text.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::UnsupportedKind`] for [`LogValue::Unsupported`].
    pub fn render(&self) -> Result<String, LogError> {
        match self {
            LogValue::Int(v) => Ok(v.to_string()),
            LogValue::Float(v) => Ok(v.to_string()),
            LogValue::Text(s) => Ok(s.clone()),
            LogValue::Unsupported(type_name) => Err(LogError::UnsupportedKind(*type_name)),
        }
    }

    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, LogValue::Unsupported(_))
    }
}

macro_rules! impl_from_lossless_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LogValue {
                fn from(v: $t) -> Self {
                    LogValue::Int(i64::from(v))
                }
            }
        )*
    };
}

// Wide integers stay integers while they fit, and fall back to their decimal text.
macro_rules! impl_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LogValue {
                fn from(v: $t) -> Self {
                    i64::try_from(v).map_or_else(|_| LogValue::Text(v.to_string()), LogValue::Int)
                }
            }
        )*
    };
}

impl_from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);
impl_from_wide_int!(isize, usize, u64, i128, u128);

impl From<f64> for LogValue {
    fn from(v: f64) -> Self {
        LogValue::Float(v)
    }
}

impl From<f32> for LogValue {
    fn from(v: f32) -> Self {
        LogValue::Float(widen_f32(v))
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Text(s.to_owned())
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Text(s)
    }
}

impl From<&String> for LogValue {
    fn from(s: &String) -> Self {
        LogValue::Text(s.clone())
    }
}

impl From<Cow<'_, str>> for LogValue {
    fn from(s: Cow<'_, str>) -> Self {
        LogValue::Text(s.into_owned())
    }
}

impl From<char> for LogValue {
    fn from(c: char) -> Self {
        LogValue::Text(c.to_string())
    }
}

/// Widens through the shortest decimal form so `0.1f32` stays `0.1`.
fn widen_f32(v: f32) -> f64 {
    v.to_string().parse().unwrap_or_else(|_| f64::from(v))
}
