//! Error types for studymate-core operations.

use thiserror::Error;

use crate::conflict::ScheduleConflict;

#[derive(Error, Debug)]
pub enum StudyError {
    /// A wall-clock value was not a well-formed 24-hour `HH:MM` string.
    #[error("Invalid time '{0}': expected HH:MM (00:00-23:59)")]
    InvalidTime(String),

    /// A weekly slot whose start is not strictly before its end.
    #[error("Invalid slot {day} {start}-{end}: start must be before end")]
    InvalidSlot {
        day: String,
        start: String,
        end: String,
    },

    #[error("{0}")]
    ScheduleConflict(Box<ScheduleConflict>),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl StudyError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        StudyError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        StudyError::Validation(message.into())
    }

    /// True for errors the caller should surface as a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, StudyError::Storage(_) | StudyError::Config(_))
    }
}

impl From<ScheduleConflict> for StudyError {
    fn from(conflict: ScheduleConflict) -> Self {
        StudyError::ScheduleConflict(Box::new(conflict))
    }
}

pub type Result<T> = std::result::Result<T, StudyError>;
