use std::str::FromStr;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use crate::config::storage_config::StorageConfigData;

const CREATE_USER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "user" (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
)
"#;

const CREATE_NOTE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS note (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created TEXT NOT NULL,
    updated TEXT NOT NULL,
    user_id INTEGER NOT NULL REFERENCES "user"(id)
)
"#;

const CREATE_NOTE_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS note_user_id ON note(user_id)";

/// Opens (creating if needed) the database file and makes sure the schema
/// exists.
pub async fn connect(config: &StorageConfigData) -> Result<SqlitePool, sqlx::Error> {
    info!("opening database at \"{}\"", config.database_path.display());
    let options = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// A private in-memory database; a single connection, since every sqlite
/// memory connection is a separate database.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    init_schema(&pool).await?;
    Ok(pool)
}

async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    debug!("creating database schema");
    for statement in [CREATE_USER_TABLE, CREATE_NOTE_TABLE, CREATE_NOTE_USER_INDEX] {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
