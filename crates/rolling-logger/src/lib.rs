//! Rolling Logger
//!
//! `log` backend for WASM frontends: each record goes to the browser
//! console and into a circular buffer holding the most recent lines.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

/// Fixed-size line buffer, oldest first
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// `[HH:MM:SS.mmm] LEVEL target: message`
pub fn format_line(time: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] {:<5} {}: {}", time, level, target, message)
}

struct ConsoleLogger {
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let time = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&time, record.level(), record.target(), &record.args().to_string());

        write_console(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Install the logger. Fails if a logger is already set.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), String> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger {
        level,
        buffer: Mutex::new(RingBuffer::new(capacity)),
    });
    log::set_logger(logger).map_err(|e| format!("Failed to set logger: {}", e))?;
    log::set_max_level(level);
    Ok(())
}

/// Most recent lines, oldest first. Empty before [`init`].
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|l| l.buffer.lock().ok().map(|b| b.lines()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut buffer = RingBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buffer = RingBuffer::new(0);
        buffer.push("ignored".to_string());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_format_line() {
        let line = format_line("12:00:01.250", Level::Info, "page_bar", "3 pages");
        assert_eq!(line, "[12:00:01.250] INFO  page_bar: 3 pages");
    }

    #[test]
    fn test_init_and_capture() {
        init(LevelFilter::Debug, 10).unwrap();
        log::info!(target: "rolling_logger_test", "hello {}", 42);
        let lines = recent_lines();
        assert!(lines.iter().any(|l| l.ends_with("rolling_logger_test: hello 42")));

        // Second install is refused
        assert!(init(LevelFilter::Debug, 10).is_err());
    }
}
