use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{item_type} '{key}' not found")]
    NotFound { item_type: String, key: String },

    #[error("Usage: '{command}' takes {expected} argument(s), got {got}")]
    Usage {
        command: String,
        expected: usize,
        got: usize,
    },

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl AppError {
    pub fn not_found(item_type: &str, key: impl Into<String>) -> Self {
        AppError::NotFound {
            item_type: item_type.to_string(),
            key: key.into(),
        }
    }

    /// Malformed input is rejected and the session keeps reading; everything
    /// else ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Usage { .. } | AppError::InvalidNumber { .. })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub fn report_error(err: &AppError) {
    match err {
        AppError::NotFound { .. } | AppError::Usage { .. } | AppError::InvalidNumber { .. } => {
            eprintln!("{}", OutputStyle::warning(&err.to_string()));
        }
        AppError::Storage(_) | AppError::Config(_) | AppError::Io(_) => {
            eprintln!("{}", OutputStyle::error(&err.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        let usage = AppError::Usage {
            command: "grade".to_string(),
            expected: 2,
            got: 1,
        };
        assert!(usage.is_recoverable());
        assert_eq!(
            usage.to_string(),
            "Usage: 'grade' takes 2 argument(s), got 1"
        );

        let number = AppError::InvalidNumber {
            field: "grade".to_string(),
            value: "A+".to_string(),
        };
        assert!(number.is_recoverable());
    }

    #[test]
    fn test_fatal_errors() {
        let missing = AppError::not_found("Project", "proj9");
        assert!(!missing.is_recoverable());
        assert_eq!(missing.to_string(), "Project 'proj9' not found");

        assert!(!AppError::Config("bad".to_string()).is_recoverable());
        assert!(!AppError::Storage(rusqlite::Error::InvalidQuery).is_recoverable());
    }
}
