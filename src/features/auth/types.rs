//! Request and response types for the auth API. Shapes are validated at the
//! boundary: a body that does not match its canonical shape is a parse error,
//! never a silent fallback.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Canonical login success shape: token and user, both required.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// The server may return the OTP inline when running in development mode.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForgotPasswordResponse {
    pub message: String,
    #[serde(default)]
    pub development: Option<bool>,
    #[serde(default)]
    pub otp: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub verified: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "confirmPassword", skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateProfileResponse {
    pub message: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_requires_token_and_user() {
        let body = r#"{"token":"abc","user":{"id":7,"name":"Ada","email":"ada@b.com"}}"#;
        let response: LoginResponse = serde_json::from_str(body).expect("Failed to deserialize");
        assert_eq!(response.token, "abc");
        assert_eq!(response.user.name, "Ada");

        // The legacy nested shape is a parse error, not a fallback.
        let nested = r#"{"data":{"user":{"id":7,"name":"Ada","email":"ada@b.com"}}}"#;
        assert!(serde_json::from_str::<LoginResponse>(nested).is_err());
    }

    #[test]
    fn forgot_password_response_carries_optional_development_otp() {
        let body = r#"{"message":"OTP sent","development":true,"otp":"482913"}"#;
        let response: ForgotPasswordResponse =
            serde_json::from_str(body).expect("Failed to deserialize");
        assert_eq!(response.development, Some(true));
        assert_eq!(response.otp.as_deref(), Some("482913"));

        let plain = r#"{"message":"OTP sent"}"#;
        let response: ForgotPasswordResponse =
            serde_json::from_str(plain).expect("Failed to deserialize");
        assert!(response.otp.is_none());
    }

    #[test]
    fn reset_request_uses_camel_case_wire_names() {
        let request = ResetPasswordRequest {
            email: "a@b.com".to_string(),
            otp: "482913".to_string(),
            new_password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
        };
        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains("newPassword"));
        assert!(json.contains("confirmPassword"));
        assert!(!json.contains("new_password"));
    }

    #[test]
    fn update_profile_request_omits_absent_password_fields() {
        let request = UpdateProfileRequest {
            name: "Ada".to_string(),
            password: None,
            confirm_password: None,
        };
        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert_eq!(json, r#"{"name":"Ada"}"#);
    }
}
