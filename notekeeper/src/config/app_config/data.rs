use serde::{Deserialize, Serialize};
use crate::config::hasher_config::HasherConfigData;
use crate::config::log_config::LogConfig;
use crate::config::storage_config::StorageConfigData;
use crate::lib_constants::{DEFAULT_MAX_CONTENT_SIZE, DEFAULT_MAX_TITLE_SIZE};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AppConfigData {
    #[serde(default)]
    pub storage: StorageConfigData,

    #[serde(default = "app_config_default_max_title_size")]
    pub max_title_size: usize,

    #[serde(default = "app_config_default_max_content_size")]
    pub max_content_size: usize,

    #[serde(default)]
    pub hasher_config: HasherConfigData,

    #[serde(default)]
    pub log: LogConfig,
}

pub fn app_config_default_max_title_size() -> usize {
    DEFAULT_MAX_TITLE_SIZE
}

pub fn app_config_default_max_content_size() -> usize {
    DEFAULT_MAX_CONTENT_SIZE
}

impl Default for AppConfigData {
    fn default() -> Self {
        AppConfigData {
            storage: StorageConfigData::default(),
            max_title_size: DEFAULT_MAX_TITLE_SIZE,
            max_content_size: DEFAULT_MAX_CONTENT_SIZE,
            hasher_config: HasherConfigData::default(),
            log: LogConfig::default(),
        }
    }
}
