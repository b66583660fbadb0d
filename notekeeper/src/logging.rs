use std::io;
use thiserror::Error;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use crate::bin_constants::{LOG_FILE_PREFIX, LOG_FILE_SUFFIX};
use crate::config::log_config::LogConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create the log directory: {0}")]
    Io(#[from] io::Error),

    #[error("failed to open the rotating log file: {0}")]
    RollingFile(#[from] InitError),

    #[error("a logger is already installed")]
    AlreadyInitialized,
}

pub fn init_tool_logging() {
    default_builder().init()
}

/// Logs to stderr, or to a daily-rotating file when `log.directory` is set.
pub fn init_daemon_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let mut builder = default_builder();
    if let Some(ref directory) = config.directory {
        std::fs::create_dir_all(directory)?;
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix(LOG_FILE_SUFFIX)
            .max_log_files(config.max_files)
            .build(directory)?;
        builder.target(env_logger::Target::Pipe(Box::new(appender)));
    }
    builder.try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

fn default_builder() -> env_logger::Builder {
    let mut builder = env_logger::builder();
    builder
        .filter_level(
            if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            }
        )
        .parse_default_env();
    builder
}
