use std::sync::Arc;
use argon2::PasswordHash;
use async_trait::async_trait;
use log::{debug, info};
use sqlx::SqlitePool;
use tokio::task;
use data::{User, UserId, UsernameString};
use crate::hasher::{Hasher, ProductionHasher};
use crate::user_db::internal::io_trait::{SqliteUserDbIo, UserDbIo};
use crate::user_db::UserDbError;

mod io_trait;

#[async_trait]
pub trait UserDb: Send + Sync {
    async fn register_user(
        &self,
        username: &UsernameString,
        password: &str,
    ) -> Result<User, UserDbError>;

    /// `None` both for an unknown user and for a wrong password.
    async fn check_user_credentials(
        &self,
        username: &UsernameString,
        password: &str,
    ) -> Result<Option<User>, UserDbError>;

    async fn get_user(&self, id: UserId) -> Result<Option<User>, UserDbError>;
}

#[allow(private_bounds)]
pub struct UserDbImpl<H: Hasher, Io: UserDbIo> {
    hasher: Arc<H>,
    io: Io,
}

#[allow(private_bounds)]
impl<H: Hasher + 'static, Io: UserDbIo> UserDbImpl<H, Io> {
    /// Hashing and verification run on the blocking pool.
    async fn hash_password(&self, password: &str) -> Result<String, UserDbError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        Ok(task::spawn_blocking(move || hasher.generate_hash(&password)).await??)
    }

    async fn verify_password(
        &self,
        username: &UsernameString,
        hash: String,
        password: &str,
    ) -> Result<bool, UserDbError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let username = username.to_string();
        task::spawn_blocking(move || -> Result<bool, UserDbError> {
            let hash = PasswordHash::new(&hash)
                .map_err(|_| UserDbError::InvalidStoredHash { username })?;
            Ok(hasher.check_hash(hash, &password)?)
        }).await?
    }
}

#[async_trait]
impl<H: Hasher + 'static, Io: UserDbIo> UserDb for UserDbImpl<H, Io> {
    async fn register_user(
        &self,
        username: &UsernameString,
        password: &str,
    ) -> Result<User, UserDbError> {
        if password.is_empty() {
            return Err(UserDbError::EmptyPassword);
        }
        if self.io.get_user_by_name(username).await?.is_some() {
            debug!("user \"{username}\" already exists");
            return Err(UserDbError::UserExists);
        }
        let hash = self.hash_password(password).await?;
        let user = self.io.insert_user(username, &hash).await?;
        info!("registered user \"{}\" with id {}", user.username, user.id);
        Ok(user)
    }

    async fn check_user_credentials(
        &self,
        username: &UsernameString,
        password: &str,
    ) -> Result<Option<User>, UserDbError> {
        let Some(stored) = self.io.get_user_by_name(username).await? else {
            debug!("login attempt for unknown user \"{username}\"");
            return Ok(None);
        };
        if self.verify_password(username, stored.hash, password).await? {
            Ok(Some(stored.user))
        } else {
            debug!("wrong password for user \"{username}\"");
            Ok(None)
        }
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, UserDbError> {
        self.io.get_user_by_id(id).await
    }
}

pub type ProductionUserDb = UserDbImpl<ProductionHasher, SqliteUserDbIo>;

impl ProductionUserDb {
    pub fn new(
        pool: SqlitePool,
        hasher: ProductionHasher,
    ) -> ProductionUserDb {
        UserDbImpl {
            hasher: Arc::new(hasher),
            io: SqliteUserDbIo::new(pool),
        }
    }
}
