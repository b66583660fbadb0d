use data::TimestampParseError;
use thiserror::Error;
use tokio::io::Error as IoError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("note not found")]
    NoteNotFound,

    #[error("note belongs to another user")]
    Forbidden,

    #[error("notes in this storage must have an owner")]
    OwnerRequired,

    #[error("cannot parse the notes file: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("cannot serialize notes: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("cannot interpret stored timestamp: {0}")]
    Timestamp(#[from] TimestampParseError),
}
