//! INI-style configuration.
//!
//! ```text
//! # comment
//! app = "demo"
//!
//! [Logging]
//! sink = file
//! log_path = ~/logs
//! log_filename = demo
//! flush_every = 50
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::log::file_log_sink::DEFAULT_FLUSH_EVERY;

/// Section read by [`LoggerConfig::from_config`].
pub const LOGGING_SECTION: &str = "Logging";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid value for [{section}] {key}: {value:?}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },
}

#[derive(Debug, Default)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    /// [`ConfigError::Read`] if the file cannot be read.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Parses INI text. Lines that are neither sections nor `key = value` are ignored.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut config = Self::empty();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current_section = Some(name.trim().to_owned());
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_owned();
                let value = value.trim().trim_matches('"').to_owned();

                match &current_section {
                    None => {
                        config.globals.insert(key, value);
                    }
                    Some(sec) => {
                        config
                            .sections
                            .entry(sec.clone())
                            .or_default()
                            .insert(key, value);
                    }
                }
            }
        }
        config
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(String::as_str)
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(String::as_str)
    }

    /// Parses a section value, `Ok(None)` when it is absent or empty.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] when the value does not parse as `T`.
    pub fn get_parsed<T: FromStr>(
        &self,
        section: &str,
        key: &str,
    ) -> Result<Option<T>, ConfigError> {
        self.get_non_empty(section, key)
            .map(|raw| {
                raw.parse().map_err(|_| ConfigError::InvalidValue {
                    section: section.to_owned(),
                    key: key.to_owned(),
                    value: raw.to_owned(),
                })
            })
            .transpose()
    }
}

/// Where the worker writes its lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SinkKind {
    #[default]
    Console,
    File,
    None,
}

impl FromStr for SinkKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" | "stdout" => Ok(SinkKind::Console),
            "file" => Ok(SinkKind::File),
            "none" | "off" => Ok(SinkKind::None),
            _ => Err(()),
        }
    }
}

/// Logger settings taken from the `[Logging]` section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggerConfig {
    pub sink: SinkKind,
    /// Directory for [`SinkKind::File`]; `logs/` next to the executable when unset.
    pub log_path: Option<PathBuf>,
    /// File name prefix for [`SinkKind::File`].
    pub log_filename: Option<String>,
    pub flush_every: u32,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            sink: SinkKind::default(),
            log_path: None,
            log_filename: None,
            flush_every: DEFAULT_FLUSH_EVERY,
        }
    }
}

impl LoggerConfig {
    /// # Errors
    /// [`ConfigError::InvalidValue`] for an unknown `sink` or a non-numeric `flush_every`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            sink: config
                .get_parsed(LOGGING_SECTION, "sink")?
                .unwrap_or(defaults.sink),
            log_path: config
                .get_non_empty(LOGGING_SECTION, "log_path")
                .map(expand_path),
            log_filename: config
                .get_non_empty(LOGGING_SECTION, "log_filename")
                .map(str::to_owned),
            flush_every: config
                .get_parsed(LOGGING_SECTION, "flush_every")?
                .unwrap_or(defaults.flush_every),
        })
    }
}

/// Expands a leading `~` to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    let home = || {
        std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from)
    };

    if path_str == "~" {
        if let Some(home_path) = home() {
            return home_path;
        }
    }
    if let Some(rest) = path_str
        .strip_prefix("~/")
        .or_else(|| path_str.strip_prefix("~\\"))
    {
        if let Some(home_path) = home() {
            return home_path.join(rest);
        }
    }
    PathBuf::from(path_str)
}
