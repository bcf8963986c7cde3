//! Feature modules grouping API types, clients, and client-side state.

pub(crate) mod auth;
pub(crate) mod reset;
