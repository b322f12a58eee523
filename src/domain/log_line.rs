//! Severity tagging of server log lines shown on the dashboard.

use std::fmt;

/// Severity marker embedded in a server log line (`...::ERROR...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSeverity {
    Error,
    Warning,
    Info,
}

impl LogSeverity {
    /// First marker found wins, checked in order of severity.
    pub fn classify(line: &str) -> Option<Self> {
        if line.contains("::ERROR") {
            Some(LogSeverity::Error)
        } else if line.contains("::WARNING") {
            Some(LogSeverity::Warning)
        } else if line.contains("::INFO") {
            Some(LogSeverity::Info)
        } else {
            None
        }
    }

    /// ANSI SGR sequence for this severity: red, yellow or grey.
    pub fn ansi(self) -> &'static str {
        match self {
            LogSeverity::Error => "\x1b[31m",
            LogSeverity::Warning => "\x1b[33m",
            LogSeverity::Info => "\x1b[90m",
        }
    }
}

/// One log line with its detected severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub text: String,
    pub severity: Option<LogSeverity>,
}

impl LogLine {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let severity = LogSeverity::classify(&text);
        Self { text, severity }
    }

    /// Render for a terminal, coloured only when a severity was detected.
    pub fn render(&self, color: bool) -> String {
        match self.severity {
            Some(severity) if color => format!("{}{}\x1b[0m", severity.ansi(), self.text),
            _ => self.text.clone(),
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
