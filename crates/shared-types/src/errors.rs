//! Common error types used across all JamCam map crates
//! Provides consistent error handling and reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for all JamCam map operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum JamcamError {
    // Network errors
    #[error("Network request failed: {message}")]
    Network { message: String },

    #[error("HTTP error! status: {status} ({url})")]
    HttpStatus { status: u16, url: String },

    #[error("Request timeout after {duration_ms}ms: {url}")]
    Timeout { url: String, duration_ms: u32 },

    // Data-related errors
    #[error("Data parse error: {message}")]
    Parse { message: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    // WASM-specific errors
    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },

    /// A newer selection superseded the request with this token
    #[error("Response for request {token} superseded by a newer selection")]
    Stale { token: u64 },
}

/// Result type alias for JamCam map operations
pub type JamcamResult<T> = Result<T, JamcamError>;

impl JamcamError {
    pub fn parse(message: impl Into<String>) -> Self {
        JamcamError::Parse {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        JamcamError::Network {
            message: message.into(),
        }
    }

    /// Superseded responses are expected and should not be reported as failures
    pub fn is_stale(&self) -> bool {
        matches!(self, JamcamError::Stale { .. })
    }
}

/// Error response structure for JavaScript interop
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: JamcamError,
    pub timestamp: i64,
    pub context: Option<ErrorContext>,
}

/// Additional context for error reporting
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
}

impl ErrorResponse {
    pub fn new(error: JamcamError) -> Self {
        Self {
            success: false,
            error,
            timestamp: chrono::Utc::now().timestamp_millis(),
            context: None,
        }
    }

    pub fn with_context(mut self, component: &str, operation: &str) -> Self {
        self.context = Some(ErrorContext {
            component: component.to_string(),
            operation: operation.to_string(),
        });
        self
    }

    /// Rejection value handed back to JavaScript
    pub fn into_js(self) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(&self.to_json())
    }

    /// Convert to JSON string for JavaScript
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"type":"JsInterop","details":{"message":"Failed to serialize error"}}}"#.to_string()
        })
    }
}

impl From<serde_json::Error> for JamcamError {
    fn from(err: serde_json::Error) -> Self {
        JamcamError::Parse {
            message: err.to_string(),
        }
    }
}

impl From<wasm_bindgen::JsValue> for JamcamError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        let message = err.as_string().unwrap_or_else(|| format!("{err:?}"));
        JamcamError::JsInterop { message }
    }
}

impl From<JamcamError> for wasm_bindgen::JsValue {
    fn from(err: JamcamError) -> Self {
        ErrorResponse::new(err).into_js()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = JamcamError::HttpStatus {
            status: 502,
            url: "http://localhost/api/v1/cams/recent?id=1".to_string(),
        };

        let response = ErrorResponse::new(error).with_context("Dashboard", "select_camera");

        let json = response.to_json();
        assert!(json.contains("HttpStatus"));
        assert!(json.contains("502"));
        assert!(json.contains("select_camera"));
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: JamcamError = json_err.into();

        match err {
            JamcamError::Parse { message } => assert!(!message.is_empty()),
            _ => panic!("Wrong error variant"),
        }
    }

    #[test]
    fn test_stale() {
        assert!(JamcamError::Stale { token: 3 }.is_stale());
        assert!(!JamcamError::network("offline").is_stale());
    }
}
