pub const DEFAULT_CONFIG_FILE: &str = "/etc/notekeeper/notekeeper.toml";
pub const APP_CONFIG_ENV_PREFIX: &str = "NOTEKEEPER_";
pub const APP_CONFIG_ENV_SPLIT: &str = "__";

pub const DEFAULT_DATABASE_PATH: &str = "/var/notekeeper/notekeeper.db";
pub const DEFAULT_NOTES_FILE: &str = "/var/notekeeper/notes.json";
pub const DEFAULT_PEPPER_PATH: &str = "/etc/notekeeper/private/pepper.b64";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub const LOG_FILE_PREFIX: &str = "notekeeperd";
pub const LOG_FILE_SUFFIX: &str = "log";
pub const DEFAULT_LOG_MAX_FILES: usize = 7;

pub const PEPPER_LENGTH: usize = 32;
