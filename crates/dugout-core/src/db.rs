use crate::error::CoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub type DbPool = SqlitePool;

/// Opens (creating if missing) the SQLite database at `database_path` and
/// applies pending migrations. Foreign keys are enforced so deleting a
/// series cascades to its games.
pub async fn establish_connection(database_path: &str) -> Result<DbPool, CoreError> {
    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
