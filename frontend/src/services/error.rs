use serde::Deserialize;
use shared::{CategoryValidationError, ExpenseValidationError};
use thiserror::Error;

/// Everything that can go wrong talking to the expense API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// 4xx other than 404, usually a server-side validation failure
    #[error("Request rejected ({status}): {message}")]
    Validation { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Refused locally, nothing was sent
    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ExpenseValidationError>),

    #[error("Invalid category: {}", .0.message())]
    InvalidCategory(CategoryValidationError),
}

/// Error body shape of the REST API (`{"message": "..."}`)
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Classify a non-success HTTP response
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        match status {
            404 => ApiError::NotFound(message),
            400..=499 => ApiError::Validation { status, message },
            _ => ApiError::Server { status, message },
        }
    }

    /// Text appended to a user-facing notification
    pub fn detail(&self) -> String {
        match self {
            ApiError::Validation { message, .. }
            | ApiError::Server { message, .. }
            | ApiError::NotFound(message) => message.clone(),
            ApiError::InvalidInput(errors) => join_messages(errors),
            ApiError::InvalidCategory(error) => error.message(),
            ApiError::Network(_) | ApiError::Decode(_) => self.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

fn extract_message(body: &str) -> String {
    let trimmed = body.trim();
    match serde_json::from_str::<ErrorBody>(trimmed) {
        Ok(ErrorBody { message: Some(message) }) => message,
        Ok(ErrorBody { message: None }) => String::new(),
        Err(_) => trimmed.to_string(),
    }
}

fn join_messages(errors: &[ExpenseValidationError]) -> String {
    errors
        .iter()
        .map(ExpenseValidationError::message)
        .collect::<Vec<_>>()
        .join("; ")
}
