use std::time::Duration;
use thiserror::Error;

/// Message shared by both response-shape failures. A response missing
/// `violations` and one missing `passes` are reported identically.
pub const INVALID_RESPONSE_MESSAGE: &str = "Scan engine returned an invalid response";

/// Errors that can occur while preparing or running an accessibility scan
#[derive(Debug, Error)]
pub enum A11yError {
    /// A required construction dependency is missing or empty
    #[error("Invalid construction: {0}")]
    InvalidConstruction(String),

    /// The page returned a value without `violations` or `passes`
    #[error("{0}")]
    InvalidResponse(String),

    /// The scan did not complete within the execution bound
    #[error("Script execution timed out after {0:?}")]
    ExecutionTimeout(Duration),

    /// The scan function or the engine threw inside the page
    #[error("Script execution failed: {0}")]
    ScriptFailed(String),

    /// Raw scan options could not be read as a serialized value
    #[error("Invalid scan options: {0}")]
    InvalidOptions(String),

    /// The scan engine script could not be loaded
    #[error("Failed to load scan script: {0}")]
    ScriptSource(String),

    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl A11yError {
    /// The error raised for any malformed scan response
    pub fn invalid_response() -> Self {
        A11yError::InvalidResponse(INVALID_RESPONSE_MESSAGE.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, A11yError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_response_message() {
        let err = A11yError::invalid_response();
        assert_eq!(err.to_string(), INVALID_RESPONSE_MESSAGE);
    }

    #[test]
    fn test_timeout_display() {
        let err = A11yError::ExecutionTimeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "Script execution timed out after 30s");
    }

    #[test]
    fn test_json_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: A11yError = parse.unwrap_err().into();
        assert!(matches!(err, A11yError::Json(_)));
    }
}
