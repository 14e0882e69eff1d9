use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

/// Build the shared connection pool.
///
/// Connections are opened lazily, so a database outage after startup shows
/// up as acquire timeouts (503) rather than a crash.
pub fn init_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_lazy(database_url)
}

/// Round-trip a trivial query so startup logs tell whether the catalog is
/// reachable.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
