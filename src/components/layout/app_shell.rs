//! Shared layout wrapper with navigation and content container. It centralizes
//! header markup so routes can focus on content. Navigation reacts to the
//! session store: signed-in users get Dashboard/Profile/Sign out, everyone
//! else gets Sign in or Sign up depending on where they already are.

use crate::app_lib::build_info;
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{
    components::A,
    hooks::{use_location, use_navigate},
};

/// Wraps routes with a header, main content container, and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let is_authenticated = auth.is_authenticated;
    let location = use_location();
    let on_login = move || location.pathname.get() == paths::LOGIN;

    let link_class = "block py-2 px-3 text-sm font-medium text-slate-700 rounded hover:text-slate-900 hover:bg-slate-100";

    view! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-slate-50 to-slate-100">
            <header class="border-b border-slate-200 bg-white">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-2">
                        <span class="font-semibold whitespace-nowrap text-slate-900">
                            "Gatehouse"
                        </span>
                    </A>
                    <nav>
                        <ul class="flex items-center gap-2">
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <Show
                                                when=on_login
                                                fallback=move || {
                                                    view! {
                                                        <A href=paths::LOGIN {..} class=link_class>
                                                            "Sign in"
                                                        </A>
                                                    }
                                                }
                                            >
                                                <A href=paths::REGISTER {..} class=link_class>
                                                    "Sign up"
                                                </A>
                                            </Show>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <A href=paths::DASHBOARD {..} class=link_class>
                                        "Dashboard"
                                    </A>
                                </li>
                                <li>
                                    <A href=paths::PROFILE {..} class=link_class>
                                        "Profile"
                                    </A>
                                </li>
                                <li>
                                    <button
                                        type="button"
                                        class=link_class
                                        on:click={
                                            let navigate = navigate.clone();
                                            move |_| {
                                                auth.logout();
                                                navigate(paths::LOGIN, Default::default());
                                            }
                                        }
                                    >
                                        "Sign out"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="py-4 text-center text-xs text-slate-400">
                {format!("gatehouse-web {}", build_info::git_commit_hash())}
            </footer>
        </div>
    }
}
