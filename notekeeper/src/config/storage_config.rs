use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::bin_constants::{DEFAULT_DATABASE_PATH, DEFAULT_MAX_CONNECTIONS, DEFAULT_NOTES_FILE};

/// `JsonFile` keeps every note in one JSON array and runs without accounts;
/// `Sqlite` keeps users and notes in a relational database and requires
/// logging in.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    JsonFile,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StorageConfigData {
    #[serde(default)]
    pub backend: StorageBackend,

    #[serde(default = "storage_config_default_database_path")]
    pub database_path: PathBuf,

    #[serde(default = "storage_config_default_notes_file")]
    pub notes_file: PathBuf,

    #[serde(default = "storage_config_default_max_connections")]
    pub max_connections: u32,
}

pub fn storage_config_default_database_path() -> PathBuf {
    DEFAULT_DATABASE_PATH.into()
}

pub fn storage_config_default_notes_file() -> PathBuf {
    DEFAULT_NOTES_FILE.into()
}

pub fn storage_config_default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

impl Default for StorageConfigData {
    fn default() -> Self {
        StorageConfigData {
            backend: StorageBackend::default(),
            database_path: DEFAULT_DATABASE_PATH.into(),
            notes_file: DEFAULT_NOTES_FILE.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}
