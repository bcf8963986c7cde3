//! Shared frontend utilities for API access, configuration, errors, validation,
//! and build metadata.
//!
//! The API helpers attach the bearer token where a call needs one and normalize
//! every non-2xx response into an [`errors::AppError::Http`] carrying the
//! server's `message` field. Local validation lives in [`validate`] so form
//! errors are caught before any request is built. Centralizing these helpers
//! keeps network behavior consistent and avoids duplicated logic in routes and
//! features.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
#[cfg(target_arch = "wasm32")]
pub(crate) mod cache;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod greeting;
pub(crate) mod validate;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{get_json_with_auth, post_json, put_json_with_auth};
#[cfg(target_arch = "wasm32")]
pub(crate) use cache::ProfileCache;
pub(crate) use errors::AppError;
