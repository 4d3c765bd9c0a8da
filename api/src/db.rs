use sqlx::SqlitePool;
use sqlx::migrate::MigrateError;

/// Runs the embedded schema migrations against the given pool.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!().run(pool).await
}
