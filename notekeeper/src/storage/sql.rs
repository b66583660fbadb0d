use async_trait::async_trait;
use log::debug;
use sqlx::{FromRow, SqlitePool};
use data::{Note, NoteDraft, NoteId, SortOrder, Timestamp, UserId};
use crate::clock::{Clock, SystemClock};
use crate::storage::{check_access, missing_note_on_delete, NoteStorage, StorageError};

#[cfg(test)] mod tests;

pub type SqlNoteStorage = SqlNoteStorageImpl<SystemClock>;

const NOTE_COLUMNS: &str = "id, title, content, created, updated, user_id";

/// Notes in the `note` table, one owner per row.
#[derive(Debug)]
pub struct SqlNoteStorageImpl<C: Clock> {
    pool: SqlitePool,
    clock: C,
}

impl SqlNoteStorage {
    pub fn new(pool: SqlitePool) -> SqlNoteStorage {
        Self::new_internal(pool, SystemClock)
    }
}

impl<C: Clock> SqlNoteStorageImpl<C> {
    fn new_internal(pool: SqlitePool, clock: C) -> Self {
        SqlNoteStorageImpl { pool, clock }
    }

    async fn select_notes(
        &self,
        owner: Option<UserId>,
        order: SortOrder,
    ) -> Result<Vec<Note>, StorageError> {
        let where_clause = if owner.is_some() { "WHERE user_id = ?" } else { "" };
        let direction = sql_direction(order);
        let sql = format!(
            "SELECT {NOTE_COLUMNS} FROM note {where_clause} \
                ORDER BY updated {direction}, id {direction}",
        );

        let mut query = sqlx::query_as::<_, NoteRow>(&sql);
        if let Some(owner) = owner {
            query = query.bind(owner.0);
        }
        query.fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Note::try_from)
            .collect()
    }
}

#[async_trait]
impl<C: Clock> NoteStorage for SqlNoteStorageImpl<C> {
    async fn list_notes(
        &self,
        owner: Option<UserId>,
        order: SortOrder,
    ) -> Result<Vec<Note>, StorageError> {
        self.select_notes(owner, order).await
    }

    async fn add_note(
        &self,
        owner: Option<UserId>,
        draft: NoteDraft,
    ) -> Result<Note, StorageError> {
        let owner = owner.ok_or(StorageError::OwnerRequired)?;
        let now = self.clock.now().to_string();
        let result = sqlx::query(
            "INSERT INTO note (title, content, created, updated, user_id) \
                VALUES (?, ?, ?, ?, ?)",
        )
            .bind(draft.title())
            .bind(draft.content())
            .bind(&now)
            .bind(&now)
            .bind(owner.0)
            .execute(&self.pool)
            .await?;
        let id = NoteId(result.last_insert_rowid());
        debug!("user {owner} added note {id}");
        Ok(Note::new(id, draft, now.parse()?, Some(owner)))
    }

    async fn get_note(
        &self,
        owner: Option<UserId>,
        id: NoteId,
    ) -> Result<Note, StorageError> {
        let row = sqlx::query_as::<_, NoteRow>(
            &format!("SELECT {NOTE_COLUMNS} FROM note WHERE id = ?"),
        )
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NoteNotFound)?;
        let note = Note::try_from(row)?;
        check_access(note.owner, owner)?;
        Ok(note)
    }

    async fn edit_note(
        &self,
        owner: Option<UserId>,
        id: NoteId,
        draft: NoteDraft,
    ) -> Result<Note, StorageError> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, NoteRow>(
            &format!("SELECT {NOTE_COLUMNS} FROM note WHERE id = ?"),
        )
            .bind(id.0)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(StorageError::NoteNotFound)?;
        let mut note = Note::try_from(row)?;
        check_access(note.owner, owner)?;
        note.apply(draft, self.clock.now());
        sqlx::query("UPDATE note SET title = ?, content = ?, updated = ? WHERE id = ?")
            .bind(&note.title)
            .bind(&note.content)
            .bind(note.updated.to_string())
            .bind(id.0)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        debug!("note {id} edited");
        Ok(note)
    }

    async fn delete_note(
        &self,
        owner: Option<UserId>,
        id: NoteId,
    ) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;
        let note_owner: Option<(i64,)> = sqlx::query_as(
            "SELECT user_id FROM note WHERE id = ?",
        )
            .bind(id.0)
            .fetch_optional(&mut *tx)
            .await?;
        let Some((note_owner,)) = note_owner else {
            debug!("note {id} to delete does not exist");
            return missing_note_on_delete(owner);
        };
        check_access(Some(UserId(note_owner)), owner)?;
        sqlx::query("DELETE FROM note WHERE id = ?")
            .bind(id.0)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        debug!("note {id} deleted");
        Ok(())
    }

    async fn search_notes(
        &self,
        owner: Option<UserId>,
        query: &str,
        order: SortOrder,
    ) -> Result<Vec<Note>, StorageError> {
        // sqlite's lower() folds ASCII only
        let query = query.to_lowercase();
        let notes = self.select_notes(owner, order).await?;
        Ok(notes.into_iter().filter(|note| note.matches(&query)).collect())
    }
}

#[derive(Debug, FromRow)]
struct NoteRow {
    id: i64,
    title: String,
    content: String,
    created: String,
    updated: String,
    user_id: i64,
}

impl TryFrom<NoteRow> for Note {
    type Error = StorageError;

    fn try_from(row: NoteRow) -> Result<Self, Self::Error> {
        Ok(Note {
            id: NoteId(row.id),
            title: row.title,
            content: row.content,
            created: row.created.parse::<Timestamp>()?,
            updated: row.updated.parse::<Timestamp>()?,
            owner: Some(UserId(row.user_id)),
        })
    }
}

fn sql_direction(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}
