use kettle_log::{ConsoleSink, KettleLogger, MemorySink};
use log::{Level, LevelFilter, Log, Record};

fn record(level: Level, msg: &str) -> String {
  let logger_sink = MemorySink::new();
  let logger = KettleLogger::new(LevelFilter::Info).add_sink(Box::new(logger_sink.clone()));
  logger.log(
    &Record::builder()
      .level(level)
      .target("kettle_web::responders::file")
      .args(format_args!("{}", msg))
      .build(),
  );
  logger_sink.lines().join("\n")
}

#[test]
fn records_at_or_above_level_are_written() {
  let line = record(Level::Warn, "rejected path");
  assert!(line.starts_with('['));
  assert!(line.ends_with("] - [WARN] kettle_web::responders::file: rejected path"));
}

#[test]
fn records_below_level_are_dropped() {
  assert_eq!(record(Level::Debug, "resolved"), "");
}

#[test]
fn every_sink_receives_the_line() {
  let first = MemorySink::new();
  let second = MemorySink::new();
  let logger = KettleLogger::new(LevelFilter::Trace)
    .add_sink(Box::new(first.clone()))
    .add_sink(Box::new(second.clone()))
    .add_sink(Box::new(ConsoleSink));
  logger.log(&Record::builder().level(Level::Trace).args(format_args!("hi mom")).build());
  logger.flush();
  assert_eq!(first.lines().len(), 1);
  assert_eq!(first.lines(), second.lines());
}

#[test]
fn global_install() {
  let sink = MemorySink::new();
  KettleLogger::new(LevelFilter::Debug)
    .add_sink(Box::new(sink.clone()))
    .init()
    .unwrap();
  log::info!(target: "kettle_auth::login", "gugu logged in");
  log::trace!("too chatty");
  let lines = sink.lines();
  assert_eq!(lines.len(), 1);
  assert!(lines[0].ends_with("[INFO] kettle_auth::login: gugu logged in"));
}
