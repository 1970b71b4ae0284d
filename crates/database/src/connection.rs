use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Establishes a connection pool to the PostgreSQL database.
///
/// The pool is built from the application settings and opens its first
/// connection eagerly, so an unreachable server or bad credentials fail here
/// rather than on the first request.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let options = PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.username)
        .password(&settings.password)
        .database(&settings.database_name);

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout())
        .connect_with(options)
        .await
        .map_err(DbError::ConnectionError)?;

    tracing::info!(
        host = %settings.host,
        port = settings.port,
        database = %settings.database_name,
        "Database connection pool established."
    );
    Ok(pool)
}

/// Checks that a connection can be acquired and used, then hands it back to the pool.
pub async fn probe(pool: &PgPool) -> Result<(), DbError> {
    let mut conn = pool.acquire().await.map_err(DbError::ConnectionError)?;
    sqlx::query("SELECT 1")
        .execute(&mut *conn)
        .await
        .map_err(DbError::ConnectionError)?;
    Ok(())
}
