use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::bin_constants::DEFAULT_LOG_MAX_FILES;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LogConfig {
    /// Rotating log files go here; without it the log is written to stderr.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    #[serde(default = "log_config_default_max_files")]
    pub max_files: usize,
}

pub fn log_config_default_max_files() -> usize {
    DEFAULT_LOG_MAX_FILES
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            directory: None,
            max_files: DEFAULT_LOG_MAX_FILES,
        }
    }
}
