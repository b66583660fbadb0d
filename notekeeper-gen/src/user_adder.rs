use std::io;
use thiserror::Error;
use data::{User, UsernameString};
use notekeeper::config::app_config::AppConfig;
use notekeeper::database;
use notekeeper::hasher::{HasherError, ProductionHasher};
use notekeeper::user_db::{ProductionUserDb, UserDb, UserDbError};

#[derive(Debug, Error)]
pub enum AddUserError {
    #[error("invalid hasher parameters: {0}")]
    HasherParams(#[from] argon2::Error),

    #[error("failed to set up the password hasher: {0}")]
    Hasher(#[from] HasherError),

    #[error("failed to open the database: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    UserDb(#[from] UserDbError),

    #[error("failed to start the async runtime: {0}")]
    Runtime(#[from] io::Error),
}

pub fn add_user(
    app_config: &AppConfig,
    username: &UsernameString,
    password: &str,
) -> Result<User, AddUserError> {
    let hasher = ProductionHasher::new(app_config.hasher_config.to_hasher_config()?)?;
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let pool = database::connect(&app_config.storage).await?;
            let user_db = ProductionUserDb::new(pool.clone(), hasher);
            let user = user_db.register_user(username, password).await?;
            pool.close().await;
            Ok::<_, AddUserError>(user)
        })
}
