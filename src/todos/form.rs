use chrono::NaiveDate;
use rocket::FromForm;
use rusqlite::Connection;
use serde::Serialize;

use crate::internal_error::AppResult;

use super::data::*;
use super::helpers::{insert_todo, update_todo};

const REQUIRED_MESSAGE: &str = "This field is required.";
const INVALID_DATE_MESSAGE: &str = "Enter a valid date.";

/// Whether a submitted form creates a new todo or rewrites the mutable
/// fields of an existing one.
#[derive(Debug, Clone, Copy)]
pub enum FormMode {
    Create,
    Edit(TodoId),
}

/// Raw, untrusted form input. Every field is optional on the wire: missing
/// text fields bind as empty strings and a missing checkbox binds as false.
#[derive(FromForm, Serialize, Debug, Clone, Default)]
pub struct TodoForm {
    #[field(default = String::new())]
    pub title: String,
    #[field(default = String::new())]
    pub description: String,
    #[field(default = String::new())]
    pub due_date: String,
    pub is_completed: bool,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct FormErrors {
    pub title: Vec<String>,
    pub due_date: Vec<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.due_date.is_empty()
    }
}

impl TodoForm {
    /// Pre-fills the form with a record's current values, for rendering an
    /// edit page.
    pub fn from_todo(todo: &Todo) -> TodoForm {
        TodoForm {
            title: todo.title.clone(),
            description: todo.description.clone(),
            due_date: todo
                .due_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            is_completed: todo.is_completed,
        }
    }

    /// All-or-nothing validation: either every field is usable and a
    /// `TodoFields` comes back, or a field-to-messages mapping does and
    /// nothing is persisted.
    pub fn validate(&self) -> Result<TodoFields, FormErrors> {
        let mut errors = FormErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.title.push(REQUIRED_MESSAGE.to_string());
        }

        let due_date = match self.due_date.trim() {
            "" => None,
            raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.due_date.push(INVALID_DATE_MESSAGE.to_string());
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(TodoFields {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            due_date,
            is_completed: self.is_completed,
        })
    }

    /// Validates and, on success, writes through to storage: an insert in
    /// create mode, an in-place update of the target record in edit mode.
    pub fn save(&self, mode: FormMode, db_connection: &Connection) -> AppResult<Result<TodoId, FormErrors>> {
        let fields = match self.validate() {
            Ok(fields) => fields,
            Err(errors) => return Ok(Err(errors)),
        };

        let id = match mode {
            FormMode::Create => insert_todo(&fields, db_connection)?,
            FormMode::Edit(id) => {
                update_todo(id, &fields, db_connection)?;
                id
            }
        };

        Ok(Ok(id))
    }
}
