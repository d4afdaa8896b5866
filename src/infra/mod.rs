//! Infrastructure: SQLite connection, migrations, repositories.

pub mod db;
pub mod record_store;

pub use db::{get_connection, init_db, init_memory_db, DbPool};
pub use record_store::{RecordRow, RecordStore};
