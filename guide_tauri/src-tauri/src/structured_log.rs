//! Structured Logging - JSON-formatted logs for machine parsing
//!
//! Emits one JSON object per event to stderr and, when configured, to a log
//! file. Output shape:
//!
//!   {"timestamp":"2024-01-10T12:34:56Z","level":"info","component":"MATCHER","event":"search","data":{"query":"install","total":8}}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
    static ref LOG_CONFIG: Mutex<LogConfig> = Mutex::new(LogConfig::default());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    fn order(&self) -> u8 {
        match self {
            LogLevel::Debug => 0,
            LogLevel::Info => 1,
            LogLevel::Warn => 2,
            LogLevel::Error => 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub component: String,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub file_path: Option<PathBuf>,
    pub min_level: LogLevel,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: LogLevel::Info,
        }
    }
}

/// Initialize the structured logger
pub fn init_logger(config: LogConfig) {
    if let Some(path) = &config.file_path {
        if let Ok(file) = OpenOptions::new().create(true).append(true).open(path) {
            if let Ok(mut log_file) = LOG_FILE.lock() {
                *log_file = Some(file);
            }
        }
    }

    if let Ok(mut cfg) = LOG_CONFIG.lock() {
        *cfg = config;
    }
}

/// Initialize with the default log file under ~/.termguide
pub fn init_default() {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let log_dir = format!("{}/.termguide", home);
    let _ = std::fs::create_dir_all(&log_dir);

    init_logger(LogConfig {
        file_path: Some(PathBuf::from(format!("{}/termguide.log", log_dir))),
        min_level: LogLevel::Info,
    });
}

/// Log an event with structured data
pub fn log_event(level: LogLevel, component: &str, event: &str, data: serde_json::Value) {
    let config = match LOG_CONFIG.lock() {
        Ok(guard) => (*guard).clone(),
        Err(_) => LogConfig::default(),
    };

    if level.order() < config.min_level.order() {
        return;
    }

    let entry = LogEntry {
        timestamp: Utc::now(),
        level: level.as_str().to_string(),
        component: component.to_string(),
        event: event.to_string(),
        data: Some(data),
    };

    let output = serde_json::to_string(&entry).unwrap_or_else(|_| format!("{:?}", entry));

    eprintln!("{}", output);

    if let Ok(mut log_file) = LOG_FILE.lock() {
        if let Some(ref mut file) = *log_file {
            let _ = writeln!(file, "{}", output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_serialization() {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: "info".to_string(),
            component: "MATCHER".to_string(),
            event: "search".to_string(),
            data: Some(serde_json::json!({"query": "install", "total": 8})),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"level\":\"info\""));
        assert!(json.contains("\"component\":\"MATCHER\""));
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(LogLevel::Debug.as_str(), "debug");
        assert_eq!(LogLevel::Info.as_str(), "info");
        assert_eq!(LogLevel::Warn.as_str(), "warn");
        assert_eq!(LogLevel::Error.as_str(), "error");
    }

    #[test]
    fn test_level_filtering() {
        assert!(LogLevel::Debug.order() < LogLevel::Info.order());
        assert!(LogLevel::Info.order() < LogLevel::Warn.order());
        assert!(LogLevel::Warn.order() < LogLevel::Error.order());
    }
}
