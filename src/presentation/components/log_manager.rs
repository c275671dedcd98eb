use chrono::{DateTime, Local};
use std::collections::{BTreeSet, VecDeque};
use std::fmt;

const MAX_LOG_SIZE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn from_tracing(level: &tracing::Level) -> Self {
        match *level {
            tracing::Level::TRACE => LogLevel::Trace,
            tracing::Level::DEBUG => LogLevel::Debug,
            tracing::Level::INFO => LogLevel::Info,
            tracing::Level::WARN => LogLevel::Warn,
            tracing::Level::ERROR => LogLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    pub fn format_timestamp(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Bounded activity log fed by the tracing capture layer.
pub struct LogManager {
    logs: VecDeque<LogEntry>,
    visible_levels: BTreeSet<LogLevel>,
}

impl LogManager {
    pub fn new() -> Self {
        Self {
            logs: VecDeque::with_capacity(MAX_LOG_SIZE),
            visible_levels: [LogLevel::Info, LogLevel::Warn, LogLevel::Error]
                .into_iter()
                .collect(),
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.logs.len() >= MAX_LOG_SIZE {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);
    }

    pub fn extend(&mut self, entries: Vec<LogEntry>) {
        for entry in entries {
            self.push(entry);
        }
    }

    pub fn clear(&mut self) {
        self.logs.clear();
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    pub fn all_logs(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs.iter()
    }

    pub fn filtered_logs(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs
            .iter()
            .filter(|entry| self.visible_levels.contains(&entry.level))
    }

    pub fn filtered_logs_reversed(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs
            .iter()
            .rev()
            .filter(|entry| self.visible_levels.contains(&entry.level))
    }

    pub fn is_level_visible(&self, level: LogLevel) -> bool {
        self.visible_levels.contains(&level)
    }

    pub fn set_level_visible(&mut self, level: LogLevel, visible: bool) {
        if visible {
            self.visible_levels.insert(level);
        } else {
            self.visible_levels.remove(&level);
        }
    }

    pub fn export_text(&self) -> String {
        self.all_logs()
            .map(|entry| {
                format!(
                    "[{}] {} {}",
                    entry.format_timestamp(),
                    entry.level,
                    entry.message
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
