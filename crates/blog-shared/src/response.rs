//! The JSON envelope wrapped around every response body.
//!
//! Success bodies are `{"data": <payload>}`, failure bodies are
//! `{"error": <message>}`. Nothing else ever goes over the wire.

use serde::{Deserialize, Serialize};

/// Successful response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Failure response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_has_single_data_key() {
        let json = serde_json::to_value(ApiResponse::new("Pong")).unwrap();
        assert_eq!(json, serde_json::json!({"data": "Pong"}));
    }

    #[test]
    fn error_envelope_has_single_error_key() {
        let json = serde_json::to_value(ErrorResponse::new("Blog not found")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Blog not found"}));
    }

    #[test]
    fn list_payload_serializes_as_array() {
        let json = serde_json::to_value(ApiResponse::new(Vec::<String>::new())).unwrap();
        assert_eq!(json, serde_json::json!({"data": []}));
    }
}
