use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

use crate::internal_error::AppResult;

pub type DBConnection = Arc<Mutex<Connection>>;

pub fn init_schema(connection: &Connection) -> AppResult<()> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            due_date TEXT,
            is_completed INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )",
        params![],
    )?;
    connection.execute(
        "CREATE INDEX IF NOT EXISTS todos_created_at ON todos (created_at)",
        params![],
    )?;

    Ok(())
}
