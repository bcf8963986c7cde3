use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{hooks::use_navigate, NavigateOptions};

/// Gates a protected view on the session store. Without a token it redirects
/// to the login view, replacing history so back-navigation does not return to
/// the guarded view; otherwise it renders children unchanged. Re-evaluated
/// whenever the session changes.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.is_authenticated.get() {
            // UX-only guard; real access control lives on the API.
            navigate(
                paths::LOGIN,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show when=move || auth.is_authenticated.get()>
            {children()}
        </Show>
    }
}
