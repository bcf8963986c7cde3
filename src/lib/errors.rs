use std::fmt;

/// Fallback shown when a server error body carries no usable `message` field.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Local form validation failure, caught before any network call.
    Validation(String),
    Config(String),
    Network(String),
    Timeout(String),
    /// Non-2xx response with the server's `message` field.
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(message) | AppError::Timeout(message) => {
                write!(formatter, "{message}")
            }
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            // Server messages are surfaced verbatim next to the form.
            AppError::Http { message, .. } => write!(formatter, "{message}"),
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Extracts the `message` field from a JSON error body, falling back to
/// [`GENERIC_ERROR_MESSAGE`] when the body is empty, malformed, or silent.
pub fn message_from_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| Some(value.get("message")?.as_str()?.to_string()))
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::{message_from_body, AppError, GENERIC_ERROR_MESSAGE};

    #[test]
    fn message_from_body_prefers_message_field() {
        assert_eq!(
            message_from_body(r#"{"message":"Email already registered"}"#),
            "Email already registered"
        );
    }

    #[test]
    fn message_from_body_falls_back_on_missing_or_malformed_bodies() {
        assert_eq!(message_from_body(""), GENERIC_ERROR_MESSAGE);
        assert_eq!(message_from_body("not json"), GENERIC_ERROR_MESSAGE);
        assert_eq!(message_from_body(r#"{"error":"nope"}"#), GENERIC_ERROR_MESSAGE);
        assert_eq!(message_from_body(r#"{"message":"   "}"#), GENERIC_ERROR_MESSAGE);
        assert_eq!(message_from_body(r#"{"message":42}"#), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn http_errors_display_the_server_message_verbatim() {
        let error = AppError::Http {
            status: 400,
            message: "Invalid OTP".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid OTP");
    }
}
