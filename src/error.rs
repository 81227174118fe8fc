//! Error types for the complaint desk client.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Client result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Generic message for exceptions that carry none
pub const REQUEST_FAILED: &str = "Request failed";

/// A client-side field rule failed; the message is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);

/// Failure of a single submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Blocked before any request was issued
    #[error("{0}")]
    Validation(&'static str),

    /// Backend answered `success: false`
    #[error("{0}")]
    Server(String),

    /// Browser rejected the request or the body could not be parsed
    #[error("{0}")]
    Transport(String),

    /// A browser API the client depends on is missing
    #[error("{0} is not available")]
    Unavailable(&'static str),
}

impl ApiError {
    /// Build a transport error from a thrown JS value
    pub fn from_js(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_default();
        ApiError::Transport(message)
    }

    /// Server failure with the backend message, or `fallback` when it sent none
    pub fn server(message: Option<String>, fallback: &str) -> Self {
        match message {
            Some(m) if !m.trim().is_empty() => ApiError::Server(m),
            _ => ApiError::Server(fallback.to_string()),
        }
    }

    /// Text for the inline error element; empty messages become `fallback`
    pub fn message_or(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.0)
    }
}

impl From<serde_wasm_bindgen::Error> for ApiError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_prefers_backend_text() {
        let err = ApiError::server(Some("Invalid credentials".into()), "Login failed");
        assert_eq!(err.to_string(), "Invalid credentials");

        let err = ApiError::server(None, "Login failed");
        assert_eq!(err.to_string(), "Login failed");

        let err = ApiError::server(Some("  ".into()), "Login failed");
        assert_eq!(err.to_string(), "Login failed");
    }

    #[test]
    fn test_empty_transport_message_uses_fallback() {
        let err = ApiError::Transport(String::new());
        assert_eq!(err.message_or(REQUEST_FAILED), "Request failed");

        let err = ApiError::Transport("Failed to fetch".into());
        assert_eq!(err.message_or(REQUEST_FAILED), "Failed to fetch");
    }

    #[test]
    fn test_validation_converts() {
        let err: ApiError = ValidationError("Title is required").into();
        assert_eq!(err, ApiError::Validation("Title is required"));
        assert_eq!(err.to_string(), "Title is required");
    }
}
