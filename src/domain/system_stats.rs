//! Snapshot returned by the `/system_stats` dashboard endpoint.

use std::fmt;

use serde::Deserialize;

use super::log_line::LogLine;

/// A dashboard figure; the server may send it as a number or preformatted text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl Default for StatValue {
    fn default() -> Self {
        StatValue::Text(String::new())
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            StatValue::Number(n) => write!(f, "{}", n),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

/// Recent server log tails.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerLogs {
    #[serde(default)]
    pub auth: Vec<String>,
    #[serde(default)]
    pub store: Vec<String>,
}

/// CPU, disk and log figures shown on the performance dashboard.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SystemStats {
    #[serde(default)]
    pub cpu: StatValue,
    #[serde(default)]
    pub total: StatValue,
    #[serde(default)]
    pub used: StatValue,
    #[serde(default)]
    pub free: StatValue,
    #[serde(default)]
    pub percent: StatValue,
    #[serde(default)]
    pub logs: ServerLogs,
}

/// Envelope of the endpoint: `{"data": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct SystemStatsEnvelope {
    pub data: SystemStats,
}

impl SystemStats {
    pub fn cpu_line(&self) -> String {
        format!("{}%", self.cpu)
    }

    pub fn disk_lines(&self) -> [String; 4] {
        [
            format!("Total: {}", self.total),
            format!("Used: {}", self.used),
            format!("Free: {}", self.free),
            format!("Percentage Used: {} %", self.percent),
        ]
    }

    pub fn auth_log(&self) -> Vec<LogLine> {
        self.logs.auth.iter().map(LogLine::new).collect()
    }

    pub fn store_log(&self) -> Vec<LogLine> {
        self.logs.store.iter().map(LogLine::new).collect()
    }

    /// Multi-line terminal rendering of the whole dashboard.
    pub fn render(&self, color: bool) -> String {
        let mut out = format!("CPU: {}\n", self.cpu_line());
        for line in self.disk_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        for (title, lines) in [("Auth log", self.auth_log()), ("Store log", self.store_log())] {
            out.push_str(title);
            out.push_str(":\n");
            for line in lines {
                out.push_str("  ");
                out.push_str(&line.render(color));
                out.push('\n');
            }
        }
        out
    }
}
