//! Auth feature covering registration, login, profile, and session state. It
//! keeps authentication logic out of the UI and must stay aligned with the
//! backend REST contract. This module touches security boundaries and must
//! avoid logging token material.
//!
//! Flow overview: login stores the bearer token and user atomically in the
//! session store and mirrors both to persistent storage; the store is
//! rehydrated once at startup and cleared in full on logout. Guarded routes
//! consult the store on every render.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireAuth;
