use crate::{LevelFilter, Logger, LoggerError};
use ordum_domain::config::LoggingConfig;
use std::str::FromStr;

/// Parses a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`), case-insensitively.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for anything else.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|_| LoggerError::InvalidConfiguration {
        message: format!("unknown log level '{level}'").into(),
        context: Some("expected off, error, warn, info, debug or trace".into()),
    })
}

/// Installs the global subscriber from a `[logging]` config section.
///
/// `level` overrides the configured level (e.g. from a `-v` flag).
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for an unknown level or when
/// both console and file output are disabled, [`LoggerError::Subscriber`] if a
/// subscriber is already installed.
pub fn init_from_config(
    name: &str,
    config: &LoggingConfig,
    level: Option<LevelFilter>,
) -> Result<Logger, LoggerError> {
    let level = match level {
        Some(level) => level,
        None => parse_level(&config.level)?,
    };
    let builder = Logger::builder().name(name).console(config.console).level(level);

    match &config.directory {
        Some(directory) => builder.path(directory).json(config.json).init(),
        None => builder.init(),
    }
}
