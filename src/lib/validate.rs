//! Local form validation. Failures here are rendered immediately and never
//! reach the network layer.

use super::errors::AppError;

/// Minimum password length enforced by the client for early UX feedback.
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// One-time passcode length required by the reset flow.
pub const OTP_LENGTH: usize = 6;

/// Filters non-digit characters out of raw OTP input and caps it at
/// [`OTP_LENGTH`] digits, so `"12a3456"` becomes `"123456"`.
pub fn normalize_otp_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(OTP_LENGTH)
        .collect()
}

/// Accepts only codes of exactly [`OTP_LENGTH`] digits.
pub fn validate_otp(code: &str) -> Result<(), AppError> {
    if code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Enter the {OTP_LENGTH}-digit code from your email."
        )))
    }
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Email is required.".to_string()));
    }
    if !trimmed.contains('@') {
        return Err(AppError::Validation(
            "Email address looks invalid.".to_string(),
        ));
    }
    Ok(())
}

/// Checks a new password and its confirmation: both required, minimum length,
/// and matching.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), AppError> {
    if password.trim().is_empty() || confirm.trim().is_empty() {
        return Err(AppError::Validation(
            "Both password fields are required.".to_string(),
        ));
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters."
        )));
    }
    if password != confirm {
        return Err(AppError::Validation("Passwords do not match.".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        normalize_otp_input, validate_email, validate_new_password, validate_otp,
        MIN_PASSWORD_LENGTH,
    };

    #[test]
    fn otp_input_is_digit_filtered_and_capped() {
        assert_eq!(normalize_otp_input("12a3456"), "123456");
        assert_eq!(normalize_otp_input("  48 29 13"), "482913");
        assert_eq!(normalize_otp_input("1234567890"), "123456");
        assert_eq!(normalize_otp_input("abc"), "");
    }

    #[test]
    fn otp_must_be_exactly_six_digits() {
        assert!(validate_otp("482913").is_ok());
        assert!(validate_otp("48291").is_err());
        assert!(validate_otp("4829131").is_err());
        assert!(validate_otp("48291x").is_err());
        assert!(validate_otp("").is_err());
    }

    #[test]
    fn email_requires_presence_and_an_at_sign() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("  ").is_err());
        assert!(validate_email("nobody").is_err());
    }

    #[test]
    fn password_confirmation_mismatch_is_rejected() {
        assert!(validate_new_password("abcdef", "abcdez").is_err());
        assert!(validate_new_password("abcdef", "abcdef").is_ok());
    }

    #[test]
    fn short_or_missing_passwords_are_rejected() {
        assert!(validate_new_password("", "").is_err());
        assert!(validate_new_password("abcde", "abcde").is_err());
        let minimum = "x".repeat(MIN_PASSWORD_LENGTH);
        assert!(validate_new_password(&minimum, &minimum).is_ok());
    }
}
