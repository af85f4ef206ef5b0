use std::time::Duration;

use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::config::DatabaseConfig;
use crate::error::{Error, Result};

pub type Pool = r2d2::Pool<SqliteConnectionManager>;
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Builds a pool of at most `pool_size` SQLite connections.
///
/// Every connection gets the busy timeout and the `foreign_keys` and WAL
/// pragmas before it is handed out. Checkout gives up after
/// `connection_timeout_ms`.
pub fn build_pool(config: &DatabaseConfig) -> Result<Pool> {
    let max_size = u32::try_from(config.pool_size)
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| Error::Config("pool size must be between 1 and u32::MAX".to_string()))?;

    let busy_timeout = config.busy_timeout();
    let manager = SqliteConnectionManager::file(&config.path)
        .with_init(move |conn| configure_connection(conn, busy_timeout));

    let pool = r2d2::Pool::builder()
        .max_size(max_size)
        .min_idle(Some(0))
        .connection_timeout(config.connection_timeout())
        .build(manager)?;

    Ok(pool)
}

fn configure_connection(conn: &mut Connection, busy_timeout: Duration) -> rusqlite::Result<()> {
    conn.busy_timeout(busy_timeout)?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    Ok(())
}

/// Opens a single connection outside any pool and asks the database for its
/// current time. Used as the startup gate and by the `check-db` command.
pub fn check_connection(config: &DatabaseConfig) -> Result<String> {
    let mut conn = Connection::open(&config.path)?;
    configure_connection(&mut conn, config.busy_timeout())?;
    let now: String = conn.query_row("SELECT datetime('now')", [], |row| row.get(0))?;
    Ok(now)
}
