pub mod app_config;
pub mod figment;
pub mod hasher_config;
pub mod log_config;
pub mod storage_config;
