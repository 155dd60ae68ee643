//! Leveled pipeline logs.
//!
//! Every diagnostic the pipeline produces goes through these helpers and is
//! emitted as a `tracing` event on the `sheetfmt` target. Standard output is
//! left to the completion message.

/// Log level for pipeline diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into() }
    }

    /// Emit this entry as a tracing event.
    pub fn emit(&self) {
        match self.level {
            LogLevel::Info => tracing::info!(target: "sheetfmt", "{}", self.message),
            LogLevel::Success => {
                tracing::info!(target: "sheetfmt", status = "success", "{}", self.message)
            }
            LogLevel::Warning => tracing::warn!(target: "sheetfmt", "{}", self.message),
            LogLevel::Error => tracing::error!(target: "sheetfmt", "{}", self.message),
        }
    }
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    LogEntry::info(msg).emit();
}

pub fn log_success(msg: impl Into<String>) {
    LogEntry::success(msg).emit();
}

pub fn log_warning(msg: impl Into<String>) {
    LogEntry::warning(msg).emit();
}

pub fn log_error(msg: impl Into<String>) {
    LogEntry::error(msg).emit();
}
