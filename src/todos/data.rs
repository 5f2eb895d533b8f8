use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use std::fmt;

pub type TodoId = i64;

#[derive(Serialize, Debug, Clone)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// The human-readable label of a todo is its title.
impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// The mutable, user-writable fields of a todo, as produced by a
/// successfully validated form. `id` and `created_at` are system-managed
/// and never pass through here.
#[derive(Debug, Clone)]
pub struct TodoFields {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub is_completed: bool,
}
