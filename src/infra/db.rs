//! SQLite connection and migrations.

use crate::error::AppError;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

pub struct DbPool(pub Mutex<Connection>);

/// Initialize DB at path, run migrations, return managed pool.
pub fn init_db(db_path: &Path) -> Result<DbPool, AppError> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = Connection::open(db_path)?;
    pool_from_connection(conn)
}

/// In-memory database with the full schema applied.
pub fn init_memory_db() -> Result<DbPool, AppError> {
    pool_from_connection(Connection::open_in_memory()?)
}

/// Fresh in-memory database. Test support only: panics if SQLite cannot open
/// an in-memory connection; use [`init_memory_db`] elsewhere.
#[doc(hidden)]
pub fn init_test_db() -> DbPool {
    init_memory_db().expect("in-memory db")
}

fn pool_from_connection(mut conn: Connection) -> Result<DbPool, AppError> {
    run_migrations(&mut conn)?;
    Ok(DbPool(Mutex::new(conn)))
}

const MIGRATIONS: &[(i32, &str)] = &[(1, include_str!("../../migrations/0001_init.sql"))];

fn run_migrations(conn: &mut Connection) -> Result<(), AppError> {
    let tx = conn.transaction()?;

    // Ensure schema_migrations exists (first run)
    tx.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (version INTEGER PRIMARY KEY, applied_at TEXT NOT NULL DEFAULT (datetime('now')))",
        [],
    )?;

    let applied: Vec<i32> = tx
        .prepare("SELECT version FROM schema_migrations ORDER BY version")?
        .query_map([], |r| r.get(0))?
        .collect::<Result<Vec<_>, _>>()?;

    for (version, sql) in MIGRATIONS {
        if applied.contains(version) {
            continue;
        }
        // The script's own INSERT INTO schema_migrations is skipped; we record the version below
        let statements = sql
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.contains("INSERT INTO schema_migrations"));
        for stmt in statements {
            tx.execute(stmt, [])?;
        }
        tx.execute(
            "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, datetime('now'))",
            [version],
        )?;
        log::info!("applied migration {}", version);
    }

    tx.commit()?;
    Ok(())
}

/// Lock the shared connection for one service call.
pub fn get_connection(pool: &DbPool) -> Result<MutexGuard<'_, Connection>, AppError> {
    pool.0
        .lock()
        .map_err(|e| AppError::Db(format!("db lock poisoned: {}", e)))
}
