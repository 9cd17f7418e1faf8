use std::env;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::prelude::*;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub const LOG_LEVEL_VAR: &str = "KETTLE_LOG";

/// A `log` backend that fans every record out to its sinks.
pub struct KettleLogger {
  level: LevelFilter,
  sinks: Vec<Box<dyn Sink>>,
}

impl KettleLogger {
  pub fn new(level: LevelFilter) -> KettleLogger {
    KettleLogger {
      level,
      sinks: Vec::new(),
    }
  }

  pub fn from_env() -> KettleLogger {
    KettleLogger::new(level_from(env::var(LOG_LEVEL_VAR).ok()))
  }

  pub fn add_sink(mut self, sink: Box<dyn Sink>) -> KettleLogger {
    self.sinks.push(sink);
    self
  }

  // installs this logger as the global `log` backend. can only succeed once per process
  pub fn init(self) -> Result<(), SetLoggerError> {
    let level = self.level;
    log::set_boxed_logger(Box::new(self))?;
    log::set_max_level(level);
    Ok(())
  }
}

impl Log for KettleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= self.level
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }
    let line = format_record(&Local::now(), record.level(), record.target(), &record.args().to_string());
    for sink in &self.sinks {
      sink.write(record.level(), &line);
    }
  }

  fn flush(&self) {
    for sink in &self.sinks {
      sink.flush();
    }
  }
}

// trace|debug|info|warn|error|off in any case. unset or anything else means info
pub fn level_from(val: Option<String>) -> LevelFilter {
  val
    .and_then(|val| val.trim().parse::<LevelFilter>().ok())
    .unwrap_or(LevelFilter::Info)
}

pub fn format_record<Tz: TimeZone>(timestamp: &DateTime<Tz>, level: Level, target: &str, msg: &str) -> String
where
  Tz::Offset: std::fmt::Display,
{
  format!("[{}] - [{}] {}: {}", timestamp.to_rfc3339(), level, target, msg)
}

pub trait Sink: Send + Sync {
  // TODO: return an error once a sink exists that can fail in a way callers care about
  fn write(&self, level: Level, line: &str);

  fn flush(&self) {}
}

/// Writes every line to stdout.
pub struct ConsoleSink;

impl Sink for ConsoleSink {
  fn write(&self, _level: Level, line: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    // nowhere to report a failed console write
    let _ = writeln!(handle, "{}", line);
  }

  fn flush(&self) {
    let _ = io::stdout().flush();
  }
}

/// Keeps lines in memory. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemorySink {
  lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
  pub fn new() -> MemorySink {
    MemorySink::default()
  }

  pub fn lines(&self) -> Vec<String> {
    self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }
}

impl Sink for MemorySink {
  fn write(&self, _level: Level, line: &str) {
    self
      .lines
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .push(line.to_owned());
  }
}
