use log::error;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::Request;
use thiserror::Error;
use notekeeper::storage::StorageError;
use notekeeper::user_db::UserDbError;

/// Failures a handler hands over to the catchers.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("not found")]
    NotFound,

    #[error("forbidden")]
    Forbidden,

    #[error("note storage failure: {0}")]
    Storage(#[source] StorageError),

    #[error("user database failure: {0}")]
    UserDb(#[from] UserDbError),
}

impl From<StorageError> for RouteError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NoteNotFound => RouteError::NotFound,
            StorageError::Forbidden => RouteError::Forbidden,
            e => RouteError::Storage(e),
        }
    }
}

impl RouteError {
    pub fn status(&self) -> Status {
        match self {
            RouteError::NotFound => Status::NotFound,
            RouteError::Forbidden => Status::Forbidden,
            RouteError::Storage(_) | RouteError::UserDb(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for RouteError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status == Status::InternalServerError {
            error!("{} {} failed: {self}", request.method(), request.uri());
        }
        Err(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_map_to_statuses() {
        assert_eq!(RouteError::from(StorageError::NoteNotFound).status(), Status::NotFound);
        assert_eq!(RouteError::from(StorageError::Forbidden).status(), Status::Forbidden);
        assert_eq!(
            RouteError::from(StorageError::OwnerRequired).status(),
            Status::InternalServerError,
        );
        assert_eq!(
            RouteError::from(UserDbError::EmptyPassword).status(),
            Status::InternalServerError,
        );
    }
}
