//! Append-only event log
//!
//! Every entry opens the log file, appends one line and closes it again, so a
//! crash at any step leaves all earlier lines on disk.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::consts::{LOG_FILE_NAME, LOG_TIMESTAMP_FORMAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Start,
    Info,
    Success,
    Skip,
    Warn,
    Error,
    Done,
}

impl Level {
    fn emoji(self) -> &'static str {
        match self {
            Level::Start => "▶",
            Level::Info => "🔎",
            Level::Success => "✅",
            Level::Skip => "ℹ️",
            Level::Warn => "⚠️",
            Level::Error => "❌",
            Level::Done => "🏁",
        }
    }
}

pub(crate) struct EventLog {
    path: PathBuf,
    echo: bool,
}

impl EventLog {
    pub(crate) fn new(path: PathBuf, echo: bool) -> Self {
        Self { path, echo }
    }

    /// `pmc_log.txt` next to the running executable, or in the working
    /// directory when the executable path is unavailable
    pub(crate) fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default()
            .join(LOG_FILE_NAME)
    }

    pub(crate) fn log(&self, level: Level, message: impl AsRef<str>) {
        let line = format_line(Local::now().naive_local(), level, message.as_ref());
        if self.echo {
            eprintln!("{line}");
        }
        if let Err(e) = self.append(&line) {
            eprintln!("Warning: Failed to write {}: {}", self.path.display(), e);
        }
    }

    pub(crate) fn start(&self, message: impl AsRef<str>) {
        self.log(Level::Start, message);
    }

    pub(crate) fn info(&self, message: impl AsRef<str>) {
        self.log(Level::Info, message);
    }

    pub(crate) fn success(&self, message: impl AsRef<str>) {
        self.log(Level::Success, message);
    }

    pub(crate) fn skip(&self, message: impl AsRef<str>) {
        self.log(Level::Skip, message);
    }

    pub(crate) fn warn(&self, message: impl AsRef<str>) {
        self.log(Level::Warn, message);
    }

    pub(crate) fn error(&self, message: impl AsRef<str>) {
        self.log(Level::Error, message);
    }

    pub(crate) fn done(&self, message: impl AsRef<str>) {
        self.log(Level::Done, message);
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

fn format_line(at: NaiveDateTime, level: Level, message: &str) -> String {
    format!(
        "[{}] {} {}",
        at.format(LOG_TIMESTAMP_FORMAT),
        level.emoji(),
        message
    )
}
