//! Logging setup.
//!
//! Everything logs through the `log` facade. [`init`] installs a `fern`
//! dispatcher that always feeds the in-memory [`Logger`] buffer and, when
//! logging is enabled in the config, also appends to a log file in the data
//! directory.

use crate::config::{Config, LoggingConfig};
use crate::constants::LOG_FILE;
use anyhow::{Context, Result};
use chrono::{Local, Utc};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Oldest entries are dropped past this many buffered lines
const MAX_BUFFERED_LOGS: usize = 500;

/// Shared in-memory log buffer that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_BUFFERED_LOGS {
                let overflow = logs.len() - MAX_BUFFERED_LOGS;
                logs.drain(..overflow);
            }
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Default log file location inside the data directory
pub fn get_log_file_path() -> Result<PathBuf> {
    Ok(Config::get_data_dir()?.join(LOG_FILE))
}

/// Build the dispatcher without installing it. A file output is attached when `log_path` is given.
pub fn build_dispatch(config: &LoggingConfig, log_path: Option<&Path>, memory: &Logger) -> Result<fern::Dispatch> {
    let memory = memory.clone();
    let memory_output = fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("{:<5} {}", record.level(), message)))
        .chain(fern::Output::call(move |record| memory.log(record.args().to_string())));

    let mut dispatch = fern::Dispatch::new().level(config.level_filter()).chain(memory_output);

    if let Some(log_path) = log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

        let file_output = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .chain(file);
        dispatch = dispatch.chain(file_output);
    }

    Ok(dispatch)
}

/// Install the global logger. Returns the log file path when file logging is on.
pub fn init(config: &LoggingConfig, memory: &Logger) -> Result<Option<PathBuf>> {
    let log_path = if config.enabled { Some(get_log_file_path()?) } else { None };
    build_dispatch(config, log_path.as_deref(), memory)?
        .apply()
        .context("Logger already initialized")?;

    Ok(log_path)
}
