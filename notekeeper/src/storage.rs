use async_trait::async_trait;
use data::{Note, NoteDraft, NoteId, SortOrder, UserId};

mod errors;
mod file;
mod sql;

pub use errors::StorageError;
pub use file::{FileNoteStorage, FileNoteStorageImpl};
pub use sql::{SqlNoteStorage, SqlNoteStorageImpl};

/// Persistence for notes.
///
/// Every call takes the acting user as `owner`. `None` means there are no
/// accounts at all: nothing is filtered and nothing is forbidden. `Some`
/// restricts listings to that user's notes and turns access to anybody
/// else's note into [`StorageError::Forbidden`].
#[async_trait]
pub trait NoteStorage: Send + Sync {
    async fn list_notes(
        &self,
        owner: Option<UserId>,
        order: SortOrder,
    ) -> Result<Vec<Note>, StorageError>;

    async fn add_note(
        &self,
        owner: Option<UserId>,
        draft: NoteDraft,
    ) -> Result<Note, StorageError>;

    async fn get_note(
        &self,
        owner: Option<UserId>,
        id: NoteId,
    ) -> Result<Note, StorageError>;

    async fn edit_note(
        &self,
        owner: Option<UserId>,
        id: NoteId,
        draft: NoteDraft,
    ) -> Result<Note, StorageError>;

    /// Deleting a missing note is a no-op without accounts and
    /// [`StorageError::NoteNotFound`] with them.
    async fn delete_note(
        &self,
        owner: Option<UserId>,
        id: NoteId,
    ) -> Result<(), StorageError>;

    /// Case-insensitive substring search over titles and contents.
    async fn search_notes(
        &self,
        owner: Option<UserId>,
        query: &str,
        order: SortOrder,
    ) -> Result<Vec<Note>, StorageError>;
}

fn check_access(
    note_owner: Option<UserId>,
    owner: Option<UserId>,
) -> Result<(), StorageError> {
    match owner {
        None => Ok(()),
        Some(owner) if note_owner == Some(owner) => Ok(()),
        Some(_) => Err(StorageError::Forbidden),
    }
}

fn missing_note_on_delete(owner: Option<UserId>) -> Result<(), StorageError> {
    match owner {
        None => Ok(()),
        Some(_) => Err(StorageError::NoteNotFound),
    }
}
