//! Logging infrastructure for the pathlib library.
//!
//! Operations that absorb failures (`find`, `delete`, `read`) still make
//! those failures visible to an operator. By default they go through the
//! [`log`] facade; [`init_logger`] installs [`Logger`] as the facade's
//! stderr backend. Callers that want failures somewhere else pass a
//! [`Diagnostics`] sink to the `*_with` variants.

use std::env;
use std::fmt;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::error::Error;

/// Environment variable consulted by [`Logger::from_env`].
pub const LOG_MODE_ENV: &str = "PATHLIB_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use pathlib::LogLevel;
/// use log::LevelFilter;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert_eq!(LogLevel::Normal.filter(), LevelFilter::Warn);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all output.
    Quiet,
    /// Errors and warnings: walk and delete failures.
    Normal,
    /// Everything down to debug, including absorbed read failures.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` filter this level lets through.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// A sink for failures that an operation absorbs instead of returning.
///
/// Implemented for [`Logger`], [`LogFacade`] and any `Fn(&Error)` closure.
///
/// # Examples
///
/// ```
/// use pathlib::{Error, PathValue};
/// use std::cell::RefCell;
///
/// let seen = RefCell::new(Vec::new());
/// let sink = |err: &Error| seen.borrow_mut().push(err.to_string());
///
/// let matches = PathValue::new("/definitely/not/here").find_with(&["*.rs"], &sink);
/// assert!(matches["*.rs"].is_empty());
/// assert_eq!(seen.borrow().len(), 1);
/// ```
pub trait Diagnostics {
    /// Records a failure that the caller will not see as an error value.
    fn report(&self, error: &Error);
}

impl<F> Diagnostics for F
where
    F: Fn(&Error),
{
    fn report(&self, error: &Error) {
        self(error);
    }
}

/// Forwards reports to the [`log`] facade at warn level.
///
/// This is the sink used by [`PathValue::find`](crate::PathValue::find) and
/// [`PathValue::delete`](crate::PathValue::delete).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl Diagnostics for LogFacade {
    fn report(&self, error: &Error) {
        log::warn!("{error}");
    }
}

/// A stderr backend for the [`log`] facade.
///
/// Records at or above the configured level are written as
/// `LEVEL: message`.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// A logger at the level named by `PATHLIB_LOG_MODE`, or Normal when
    /// the variable is unset or unrecognized.
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|value| LogLevel::parse(&value).ok())
            .unwrap_or(LogLevel::Normal);
        Self::new(level)
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

impl Diagnostics for Logger {
    fn report(&self, error: &Error) {
        self.log(
            &Record::builder()
                .level(Level::Warn)
                .target(module_path!())
                .args(format_args!("{error}"))
                .build(),
        );
    }
}

/// Installs [`Logger`] as the global `log` backend.
///
/// `level` overrides `PATHLIB_LOG_MODE`; with `None` the environment
/// decides. Returns the level that was installed.
///
/// # Errors
///
/// Returns an error if a global logger has already been installed.
///
/// # Examples
///
/// ```
/// use pathlib::{init_logger, LogLevel, PathValue};
///
/// init_logger(Some(LogLevel::Normal)).unwrap();
/// // the walk failure below is printed to stderr as "WARN: ..."
/// let _ = PathValue::new("/definitely/not/here").find(&["*.rs"]);
/// ```
pub fn init_logger(level: Option<LogLevel>) -> Result<LogLevel, SetLoggerError> {
    let logger = level.map_or_else(Logger::from_env, Logger::new);
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(logger.level().filter());
    Ok(logger.level())
}
