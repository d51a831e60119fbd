use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::log::log_sink::LogSink;

/// Default number of lines between flushes.
pub const DEFAULT_FLUSH_EVERY: u32 = 100;

/// Buffered sink writing to a per-process log file.
///
/// Opening never fails: if the target file cannot be created the sink falls
/// back to a file in the temp directory, and then to a sink that discards
/// everything. [`path`](Self::path) reports which file is actually in use.
pub struct FileLogSink {
    out: BufWriter<Box<dyn Write + Send>>,
    path: Option<PathBuf>,
    flush_every: u32,
    since_flush: u32,
}

impl FileLogSink {
    /// Creates `<dir>/<app_name>-YYYYMMDD_HHMMSS-pid<PID>.log`.
    ///
    /// The directory is created if missing. Without `app_name` the file name
    /// starts at the timestamp.
    ///
    /// # Example Filename
    /// `target/debug/logs/asynclog-20251102_023045-pid1234.log`
    #[must_use]
    pub fn in_dir<D: AsRef<Path>>(dir: D, app_name: Option<&str>, flush_every: u32) -> Self {
        let dir = dir.as_ref();
        let _ = fs::create_dir_all(dir);
        Self::open(dir.join(file_name(app_name)), flush_every)
    }

    /// Same as [`in_dir`](Self::in_dir) with a `logs/` directory next to the executable.
    #[must_use]
    pub fn next_to_exe(app_name: Option<&str>, flush_every: u32) -> Self {
        Self::in_dir(exe_dir_fallback_cwd().join("logs"), app_name, flush_every)
    }

    /// Appends to exactly `path`, with the usual fallbacks.
    #[must_use]
    pub fn open<P: Into<PathBuf>>(path: P, flush_every: u32) -> Self {
        let path = path.into();
        let fallback = std::env::temp_dir().join("asynclog-fallback.log");

        // Target file -> temp file -> discard (never panic).
        let (writer, path): (Box<dyn Write + Send>, Option<PathBuf>) =
            if let Ok(f) = append(&path) {
                (Box::new(f), Some(path))
            } else if let Ok(f) = append(&fallback) {
                (Box::new(f), Some(fallback))
            } else {
                (Box::new(io::sink()), None)
            };

        Self {
            out: BufWriter::new(writer),
            path,
            flush_every: flush_every.max(1),
            since_flush: 0,
        }
    }

    /// File being written, or `None` when every fallback failed.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl LogSink for FileLogSink {
    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.out, "{line}");
        self.since_flush += 1;
        if self.since_flush >= self.flush_every {
            let _ = self.out.flush();
            self.since_flush = 0;
        }
    }

    fn flush(&mut self) {
        let _ = self.out.flush();
        self.since_flush = 0;
    }
}

impl Drop for FileLogSink {
    fn drop(&mut self) {
        let _ = self.out.flush();
    }
}

fn append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn file_name(app_name: Option<&str>) -> String {
    let ts = timestamp_for_filename();
    let pid = std::process::id();
    match app_name {
        Some(name) => format!("{name}-{ts}-pid{pid}.log"),
        None => format!("{ts}-pid{pid}.log"),
    }
}

/// Directory of the executable (target/{debug,release}), or the current
/// working directory when it cannot be determined.
fn exe_dir_fallback_cwd() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// `YYYYMMDD_HHMMSS` in UTC, or `unix_<secs>` if the date is out of range.
fn timestamp_for_filename() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    civil_from_unix(secs).map_or_else(
        || format!("unix_{secs}"),
        |t| {
            format!(
                "{:04}{:02}{:02}_{:02}{:02}{:02}",
                t.year, t.month, t.day, t.hour, t.min, t.sec
            )
        },
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CivilTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
}

/// Gregorian UTC date from a UNIX timestamp (days-from-civil inverse).
#[allow(clippy::many_single_char_names)]
fn civil_from_unix(secs: u64) -> Option<CivilTime> {
    let sec = (secs % 60) as u32;
    let min = (secs / 60 % 60) as u32;
    let hour = (secs / 3_600 % 24) as u32;
    let days = secs / 86_400;

    let z = i128::from(days) + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i128::from(m <= 2);

    Some(CivilTime {
        year: i32::try_from(y).ok()?,
        month: u32::try_from(m).ok()?,
        day: u32::try_from(d).ok()?,
        hour,
        min,
        sec,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("asynclog-test-{tag}-{}", std::process::id()))
    }

    #[test]
    fn civil_time_known_dates() {
        assert_eq!(
            civil_from_unix(0),
            Some(CivilTime {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                min: 0,
                sec: 0,
            })
        );
        // 2025-11-02T02:30:45Z
        assert_eq!(
            civil_from_unix(1_762_050_645),
            Some(CivilTime {
                year: 2025,
                month: 11,
                day: 2,
                hour: 2,
                min: 30,
                sec: 45,
            })
        );
        // Leap day.
        assert_eq!(
            civil_from_unix(951_782_400).map(|t| (t.month, t.day)),
            Some((2, 29))
        );
    }

    #[test]
    fn file_name_carries_app_and_pid() {
        let name = file_name(Some("demo"));
        assert!(name.starts_with("demo-"));
        assert!(name.ends_with(&format!("-pid{}.log", std::process::id())));
    }

    #[test]
    fn writes_lines_to_file() {
        let dir = scratch_dir("file-sink");
        let path = {
            let mut sink = FileLogSink::in_dir(&dir, Some("unit"), 1_000);
            sink.write_line("[INFOS]:first");
            sink.write_line("[ERROR]:second");
            sink.path().map(Path::to_path_buf).unwrap()
        };

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[INFOS]:first\n[ERROR]:second\n");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn flushes_every_n_lines() {
        let dir = scratch_dir("flush");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("flush.log");
        let mut sink = FileLogSink::open(&path, 2);

        sink.write_line("a");
        sink.write_line("b");
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");

        drop(sink);
        let _ = fs::remove_dir_all(&dir);
    }
}
