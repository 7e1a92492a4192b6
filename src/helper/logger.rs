use crate::config;
#[cfg(feature = "colored-term")]
use colored::{Color, ColoredString, Colorize};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::{env, str::FromStr};

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

/// A simple [`log`] implimentation which prints to stderr, leaving stdout for tool output.
/// Level filtering is left to [`log::set_max_level`], see [`init_logger`].
pub struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    #[cfg(feature = "colored-term")]
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // level color
            let color = match record.level() {
                Level::Error => Color::BrightRed,
                Level::Warn => Color::Yellow,
                Level::Info => Color::Cyan,
                Level::Debug => Color::Magenta,
                Level::Trace => Color::Blue,
            };
            // log message
            let args = format!("{}", record.args());
            let args = if record.level() == Level::Error {
                // only color error message to make them stand out
                args.color(Color::Red)
            } else {
                ColoredString::from(args.as_str())
            };
            eprintln!(
                "{} {} {} {}",
                level_str(record.level()).color(color),
                record
                    .module_path()
                    .unwrap_or("(unknown module)")
                    .color(color),
                ">".color(color),
                args,
            );
        }
    }

    #[cfg(not(feature = "colored-term"))]
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{} {} {} {}",
                level_str(record.level()),
                record.module_path().unwrap_or("(unknown module)"),
                ">",
                record.args(),
            );
        }
    }

    fn flush(&self) {}
}

/// Installs [`ConsoleLogger`] as the global logger. The level is read from the
/// [`config::ENV::LOG_LEVEL`] environment variable, falling back to [`config::DEFAULT_LOG_LEVEL`].
pub fn init_logger() -> Result<(), SetLoggerError> {
    log::set_logger(&CONSOLE_LOGGER)?;
    let level = level_filter_override(env::var(config::ENV::LOG_LEVEL).ok().as_deref())
        .unwrap_or(config::DEFAULT_LOG_LEVEL);
    log::set_max_level(level);
    Ok(())
}

fn level_filter_override(env_value: Option<&str>) -> Option<LevelFilter> {
    LevelFilter::from_str(env_value?.trim()).ok()
}

fn level_str(level: Level) -> &'static str {
    match level {
        Level::Error => "[E]",
        Level::Warn => "[W]",
        Level::Info => "[I]",
        Level::Debug => "[D]",
        Level::Trace => "[T]",
    }
}

// ~~ Tests ~~
