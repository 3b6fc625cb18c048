//! Crate error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while planning a timetable.
#[derive(Debug, Error)]
pub enum TimetableError {
    #[error("invalid input ({} problem(s)): {}", .0.len(), summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("unknown course: {0}")]
    UnknownCourse(String),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<Vec<ValidationError>> for TimetableError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

impl TimetableError {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, TimetableError>;
