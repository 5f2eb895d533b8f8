use rusqlite;
use std::error::Error;

use std::fmt;
use std::sync::PoisonError;

use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};

#[derive(Debug)]
pub enum AppError {
    NotFound,
    Internal(String),
}

impl Error for AppError {}
impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "record not found"),
            AppError::Internal(what) => write!(f, "internal error: {}", what),
        }
    }
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(e: PoisonError<T>) -> AppError {
        AppError::Internal(e.to_string())
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> AppError {
        AppError::Internal(e.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(e: chrono::ParseError) -> AppError {
        AppError::Internal(e.to_string())
    }
}

impl<'r> Responder<'r, 'static> for AppError {
    fn respond_to(self, _request: &'r Request<'_>) -> response::Result<'static> {
        match self {
            AppError::NotFound => Err(Status::NotFound),
            AppError::Internal(what) => {
                log::error!("request failed: {}", what);
                Err(Status::InternalServerError)
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
