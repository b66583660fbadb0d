use async_trait::async_trait;
use sqlx::SqlitePool;
use data::{User, UserId, UsernameString};
use crate::user_db::UserDbError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct StoredUser {
    pub user: User,
    pub hash: String,
}

#[async_trait]
pub(super) trait UserDbIo: Send + Sync {
    async fn get_user_by_name(
        &self,
        username: &UsernameString,
    ) -> Result<Option<StoredUser>, UserDbError>;

    async fn get_user_by_id(
        &self,
        id: UserId,
    ) -> Result<Option<User>, UserDbError>;

    /// Fails with [`UserDbError::UserExists`] when the name is taken.
    async fn insert_user(
        &self,
        username: &UsernameString,
        hash: &str,
    ) -> Result<User, UserDbError>;
}

pub struct SqliteUserDbIo {
    pool: SqlitePool,
}

impl SqliteUserDbIo {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteUserDbIo { pool }
    }
}

fn make_user(id: i64, username: String) -> Result<User, UserDbError> {
    Ok(
        User {
            id: UserId(id),
            username: username
                .parse()
                .map_err(|_| UserDbError::InvalidStoredUsername(username))?,
        }
    )
}

#[async_trait]
impl UserDbIo for SqliteUserDbIo {
    async fn get_user_by_name(
        &self,
        username: &UsernameString,
    ) -> Result<Option<StoredUser>, UserDbError> {
        let row: Option<(i64, String, String)> = sqlx::query_as(
            r#"SELECT id, username, password FROM "user" WHERE username = ?"#,
        )
            .bind(&**username)
            .fetch_optional(&self.pool)
            .await?;
        row
            .map(|(id, username, hash)| Ok(
                StoredUser {
                    user: make_user(id, username)?,
                    hash,
                }
            ))
            .transpose()
    }

    async fn get_user_by_id(
        &self,
        id: UserId,
    ) -> Result<Option<User>, UserDbError> {
        let row: Option<(i64, String)> = sqlx::query_as(
            r#"SELECT id, username FROM "user" WHERE id = ?"#,
        )
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;
        row
            .map(|(id, username)| make_user(id, username))
            .transpose()
    }

    async fn insert_user(
        &self,
        username: &UsernameString,
        hash: &str,
    ) -> Result<User, UserDbError> {
        let result = sqlx::query(
            r#"INSERT INTO "user" (username, password) VALUES (?, ?)"#,
        )
            .bind(&**username)
            .bind(hash)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_error) if db_error.is_unique_violation() =>
                    UserDbError::UserExists,
                e => e.into(),
            })?;
        Ok(
            User {
                id: UserId(result.last_insert_rowid()),
                username: username.clone(),
            }
        )
    }
}
