use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("No contact at position {index} (list has {len})")]
    Index { index: usize, len: usize },

    #[error("Invalid CSV format on line {line}: expected name, phone and email, found {fields} field(s)")]
    Format { line: u64, fields: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),
}

/// Reasons a contact is refused by `upsert`, in the order they are checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    EmptyField { field: &'static str },

    #[error("please enter a valid email address")]
    InvalidEmail,

    #[error("please enter a valid phone number")]
    InvalidPhone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_message() {
        let err = AppError::from(ValidationError::EmptyField { field: "name" });

        assert_eq!(format!("{}", err), "Validation failed: name is required");
    }

    #[test]
    fn index_error_message() {
        let err = AppError::Index { index: 4, len: 2 };

        assert!(format!("{}", err).contains("position 4"));
    }
}
