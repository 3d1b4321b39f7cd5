use serde::{Deserialize, Serialize};

/// Body of a successful event creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: String,
}

/// Body of a successful operation that returns no data.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error envelope. `details` carries the classified warehouse message for
/// upstream failures and is omitted for validation errors.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_omit_details() {
        let body = ErrorResponse {
            error: "Missing required fields".to_string(),
            details: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Missing required fields"}"#);
    }

    #[test]
    fn upstream_errors_carry_details() {
        let body = ErrorResponse {
            error: "Internal server error".to_string(),
            details: Some("permission denied for table events".to_string()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["details"], "permission denied for table events");
    }
}
