//! Logging setup

use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, level_filters::LevelFilter};

/// The log level name was not recognised
#[derive(Debug, Error, PartialEq, Eq)]
#[error("\"{0}\" is not a valid logging level.  Possible values are debug, info, warn, and error.")]
pub struct InvalidLogLevel(pub String);

/// Verbosity of the tool's log output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogLevel(LevelFilter);

impl LogLevel {
    /// The level used when none is given
    pub const DEFAULT: LogLevel = LogLevel(LevelFilter::WARN);

    /// The underlying `tracing` filter
    pub fn filter(&self) -> LevelFilter {
        self.0
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for LogLevel {
    type Err = InvalidLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let filter = match s.trim().to_ascii_lowercase().as_str() {
            "trace" | "notset" => LevelFilter::TRACE,
            "debug" => LevelFilter::DEBUG,
            "info" => LevelFilter::INFO,
            "warn" | "warning" => LevelFilter::WARN,
            // no level above error in tracing
            "error" | "critical" | "fatal" => LevelFilter::ERROR,
            _ => return Err(InvalidLogLevel(s.to_string())),
        };

        Ok(Self(filter))
    }
}

/// Install the global subscriber, writing timestamped lines to stderr.
///
/// Only the first call in a process takes effect.
pub fn init(level: LogLevel) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level.filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_err() {
        debug!("global subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_documented_levels_parse() -> TestResult {
        assert_eq!("debug".parse::<LogLevel>()?.filter(), LevelFilter::DEBUG);
        assert_eq!("info".parse::<LogLevel>()?.filter(), LevelFilter::INFO);
        assert_eq!("warn".parse::<LogLevel>()?.filter(), LevelFilter::WARN);
        assert_eq!("error".parse::<LogLevel>()?.filter(), LevelFilter::ERROR);

        Ok(())
    }

    #[test]
    fn test_level_names_are_case_insensitive() -> TestResult {
        assert_eq!("DEBUG".parse::<LogLevel>()?, "debug".parse::<LogLevel>()?);
        assert_eq!("Warning".parse::<LogLevel>()?, LogLevel::DEFAULT);
        assert_eq!("CRITICAL".parse::<LogLevel>()?.filter(), LevelFilter::ERROR);

        Ok(())
    }

    #[test]
    fn test_fatal_and_notset_aliases() -> TestResult {
        assert_eq!("fatal".parse::<LogLevel>()?.filter(), LevelFilter::ERROR);
        assert_eq!("FATAL".parse::<LogLevel>()?, "critical".parse::<LogLevel>()?);
        assert_eq!("notset".parse::<LogLevel>()?.filter(), LevelFilter::TRACE);

        Ok(())
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let result = "verbose".parse::<LogLevel>();

        assert_eq!(result, Err(InvalidLogLevel("verbose".to_string())));
    }

    #[test]
    fn test_invalid_level_message() {
        let err = InvalidLogLevel("verbose".to_string());

        assert_eq!(
            err.to_string(),
            "\"verbose\" is not a valid logging level.  Possible values are debug, info, warn, and error."
        );
    }

    #[test]
    fn test_default_is_warn() {
        assert_eq!(LogLevel::default().filter(), LevelFilter::WARN);
    }
}
