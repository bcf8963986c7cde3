//! Alert banners for success, error, and informational messages. Messages must
//! be safe to render and should never include secrets or tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-md border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-600"
        }
        AlertKind::Success => {
            "rounded-md border border-green-200 bg-green-50 px-4 py-3 text-sm text-green-600"
        }
        AlertKind::Info => {
            "rounded-md border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-600"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
