// crates/infra/src/logging.rs
//! Diagnostics on standard error through the `log` facade.
//!
//! Records print as `[WARNING] dirlist: <message>`. The tag is colored when
//! standard error is a terminal. Warnings and errors are always printed;
//! `DIRLIST_LOG` can only add `info`, `debug` and `trace` records.

use std::{
    fmt,
    io::Write,
    str::FromStr,
    sync::atomic::{AtomicBool, Ordering},
};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "DIRLIST_LOG";

const PROGRAM: &str = "dirlist";

pub struct StderrLogger {
    colored: AtomicBool,
}

impl StderrLogger {
    const fn new() -> Self {
        Self { colored: AtomicBool::new(false) }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.args(), self.colored.load(Ordering::Relaxed));
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger::new();

/// Installs the logger. Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    LOGGER.colored.store(atty::is(atty::Stream::Stderr), Ordering::Relaxed);
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Level named by `value` (`info`, `debug`, `trace`, any case), never
/// quieter than `Warn`: path and option warnings are part of the output.
pub fn level_from_env(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .map_or(LevelFilter::Warn, |level| level.max(LevelFilter::Warn))
}

fn tag(level: Level) -> (&'static str, u8) {
    match level {
        Level::Error => ("ERROR", 31),
        Level::Warn => ("WARNING", 33),
        Level::Info => ("INFO", 32),
        Level::Debug => ("DEBUG", 90),
        Level::Trace => ("TRACE", 90),
    }
}

/// One diagnostic line, without the trailing newline.
pub fn format_record(level: Level, message: &fmt::Arguments<'_>, colored: bool) -> String {
    let (label, color) = tag(level);
    if colored {
        format!("\x1b[{color}m[{label}]\x1b[39m \x1b[1m{PROGRAM}:\x1b[22m {message}")
    } else {
        format!("[{label}] {PROGRAM}: {message}")
    }
}
