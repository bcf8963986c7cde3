//! Landing page for signed-in users: a time-of-day greeting plus profile
//! summary fetched from the API. The profile read is skipped entirely when no
//! token is held; the route guard redirects before that happens in practice.

use crate::app_lib::{cache::use_profile_cache, greeting};
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::User;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let cache = use_profile_cache();

    let profile = LocalResource::new(move || {
        let token = auth.token();
        // Tracked so invalidation by a mutating call triggers a refetch.
        let _version = cache.version();
        async move {
            match token {
                Some(token) => client::fetch_profile(&token).await.map(Some),
                None => Ok(None),
            }
        }
    });

    view! {
        <AppShell>
            <div class="max-w-4xl mx-auto">
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match profile.get() {
                        Some(Ok(Some(user))) => view! { <DashboardContent user=user /> }.into_any(),
                        Some(Ok(None)) => ().into_any(),
                        Some(Err(err)) => view! {
                            <Alert kind=AlertKind::Error message=err.to_string() />
                        }
                        .into_any(),
                        None => view! { <Spinner /> }.into_any(),
                    }}
                </Suspense>
            </div>
        </AppShell>
    }
}

#[component]
fn DashboardContent(user: User) -> impl IntoView {
    let greeting = greeting::time_based_greeting(&user.name);

    view! {
        <div class="mb-8">
            <h1 class="text-3xl font-bold text-slate-900 mb-2">{greeting}</h1>
            <p class="text-slate-500">"Welcome to your dashboard"</p>
        </div>
        <div class="grid gap-6 md:grid-cols-2">
            <div class="rounded-lg border border-slate-200 bg-white p-6">
                <h2 class="text-lg font-semibold text-slate-900">"Profile information"</h2>
                <p class="mt-2 text-sm text-slate-600">{user.name}</p>
                <p class="mt-1 text-sm text-slate-500">{format!("Email: {}", user.email)}</p>
            </div>
            <div class="rounded-lg border border-slate-200 bg-white p-6">
                <h2 class="text-lg font-semibold text-slate-900">"Quick actions"</h2>
                <div class="mt-4">
                    <A
                        href=paths::PROFILE
                        {..}
                        class="inline-flex items-center px-4 py-2 text-sm font-medium text-slate-700 bg-white border border-slate-300 rounded-lg hover:bg-slate-50"
                    >
                        "Edit profile"
                    </A>
                </div>
            </div>
        </div>
    }
}
