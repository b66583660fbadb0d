use thiserror::Error;
use crate::hasher::HasherError;

#[derive(Debug, Error)]
pub enum UserDbError {
    #[error("user already exists")]
    UserExists,

    #[error("the password must not be empty")]
    EmptyPassword,

    #[error("stored password hash of user \"{username}\" is invalid")]
    InvalidStoredHash {
        username: String,
    },

    #[error("stored username \"{0}\" is invalid")]
    InvalidStoredUsername(String),

    #[error(transparent)]
    Hasher(#[from] HasherError),

    #[error("password hashing task failed: {0}")]
    HasherTask(#[from] tokio::task::JoinError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
