//! Client wrappers for the auth API endpoints. These helpers centralize
//! endpoint paths and cache invalidation, keeping auth flows consistent and
//! token handling out of route code. Mutating calls invalidate cached profile
//! data after success so the next profile read refetches.

use crate::{
    app_lib::{get_json_with_auth, post_json, put_json_with_auth, AppError, ProfileCache},
    features::auth::types::{
        ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest, LoginResponse,
        MessageResponse, RegisterRequest, ResetPasswordRequest, UpdateProfileRequest,
        UpdateProfileResponse, User, VerifyOtpRequest, VerifyOtpResponse,
    },
};

/// Registers a new account. Invalidates cached profile data on success.
pub async fn register(
    request: &RegisterRequest,
    cache: ProfileCache,
) -> Result<MessageResponse, AppError> {
    let response = post_json("/register", request).await?;
    cache.invalidate();
    Ok(response)
}

/// Logs in and returns the canonical `{token, user}` payload.
/// Invalidates cached profile data on success.
pub async fn login(request: &LoginRequest, cache: ProfileCache) -> Result<LoginResponse, AppError> {
    let response = post_json("/login", request).await?;
    cache.invalidate();
    Ok(response)
}

/// Requests a password-reset OTP for the given email.
pub async fn forgot_password(
    request: &ForgotPasswordRequest,
) -> Result<ForgotPasswordResponse, AppError> {
    post_json("/forgot-password", request).await
}

/// Checks an OTP against the server; `verified: false` is a normal response,
/// not an error.
pub async fn verify_otp(request: &VerifyOtpRequest) -> Result<VerifyOtpResponse, AppError> {
    post_json("/verify-otp", request).await
}

/// Submits the new password with the verified OTP as proof.
/// Invalidates cached profile data on success.
pub async fn reset_password(
    request: &ResetPasswordRequest,
    cache: ProfileCache,
) -> Result<MessageResponse, AppError> {
    let response = post_json("/reset-password", request).await?;
    cache.invalidate();
    Ok(response)
}

/// Fetches the authenticated user's profile. Requires a token by signature;
/// callers must not issue this without one.
pub async fn fetch_profile(token: &str) -> Result<User, AppError> {
    get_json_with_auth("/profile", token).await
}

/// Updates name and optionally the password.
/// Invalidates cached profile data on success.
pub async fn update_profile(
    request: &UpdateProfileRequest,
    token: &str,
    cache: ProfileCache,
) -> Result<UpdateProfileResponse, AppError> {
    let response = put_json_with_auth("/profile", request, token).await?;
    cache.invalidate();
    Ok(response)
}
