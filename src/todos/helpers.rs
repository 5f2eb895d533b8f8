use chrono::offset::Utc;
use chrono::{DateTime, NaiveDate, SecondsFormat};
use rusqlite::{params, Connection, Row};

use crate::internal_error::{AppError, AppResult};

use super::data::*;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

fn todo_from_row(row: &Row) -> AppResult<Todo> {
    let due_date = match row.get::<_, Option<String>>(3)? {
        Some(raw) => Some(NaiveDate::parse_from_str(&raw, DUE_DATE_FORMAT)?),
        None => None,
    };
    let created_at: String = row.get(5)?;

    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        due_date,
        is_completed: row.get(4)?,
        created_at: DateTime::parse_from_rfc3339(&created_at)?.with_timezone(&Utc),
    })
}

pub fn insert_todo(fields: &TodoFields, db_connection: &Connection) -> AppResult<TodoId> {
    // Fixed-width RFC 3339 so the stored text sorts chronologically.
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true);

    db_connection.execute(
        "INSERT INTO todos (title, description, due_date, is_completed, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            fields.title,
            fields.description,
            fields.due_date.map(|date| date.format(DUE_DATE_FORMAT).to_string()),
            fields.is_completed,
            created_at,
        ],
    )?;

    Ok(db_connection.last_insert_rowid())
}

pub fn get_todo(id: TodoId, db_connection: &Connection) -> AppResult<Todo> {
    let mut statement = db_connection.prepare(
        "SELECT id, title, description, due_date, is_completed, created_at
         FROM todos WHERE id = (?1)",
    )?;
    let mut rows = statement.query(params![id])?;

    match rows.next()? {
        Some(row) => todo_from_row(row),
        None => Err(AppError::NotFound),
    }
}

pub fn get_all_todos(db_connection: &Connection) -> AppResult<Vec<Todo>> {
    let mut statement = db_connection.prepare(
        "SELECT id, title, description, due_date, is_completed, created_at
         FROM todos ORDER BY created_at DESC",
    )?;
    let mut rows = statement.query(params![])?;

    let mut todos = vec![];
    while let Some(row) = rows.next()? {
        todos.push(todo_from_row(row)?);
    }

    Ok(todos)
}

/// Updates the user-writable fields only; `created_at` and `id` are never
/// touched after creation.
pub fn update_todo(id: TodoId, fields: &TodoFields, db_connection: &Connection) -> AppResult<()> {
    let changed = db_connection.execute(
        "UPDATE todos SET title = (?1), description = (?2), due_date = (?3), is_completed = (?4)
         WHERE id = (?5)",
        params![
            fields.title,
            fields.description,
            fields.due_date.map(|date| date.format(DUE_DATE_FORMAT).to_string()),
            fields.is_completed,
            id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound);
    }

    Ok(())
}

pub fn delete_todo_from_db(id: TodoId, db_connection: &Connection) -> AppResult<()> {
    let changed = db_connection.execute("DELETE FROM todos WHERE id = (?1)", params![id])?;

    if changed == 0 {
        return Err(AppError::NotFound);
    }

    Ok(())
}

/// Flips `is_completed` in a single statement; last write wins under
/// concurrent toggles.
pub fn toggle_completed(id: TodoId, db_connection: &Connection) -> AppResult<()> {
    let changed = db_connection.execute(
        "UPDATE todos SET is_completed = NOT is_completed WHERE id = (?1)",
        params![id],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound);
    }

    Ok(())
}
