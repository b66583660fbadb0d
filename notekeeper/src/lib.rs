pub mod config;
pub mod storage;
pub mod user_db;
pub mod hasher;
pub mod logging;
pub mod database;
pub mod clock;
pub mod bin_constants;
mod lib_constants;
pub mod util;
