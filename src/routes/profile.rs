//! Profile route: view and edit the authenticated user. Name is editable,
//! email is fixed, and an optional new password is validated locally before
//! the update goes out. A successful update replaces the stored user while
//! leaving the token untouched, and invalidates the profile cache so the form
//! reloads with fresh server state.

use crate::app_lib::{cache::use_profile_cache, validate, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::{UpdateProfileRequest, User};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

const INPUT_CLASS: &str = "bg-slate-50 border border-slate-300 text-slate-900 text-sm rounded-lg focus:ring-slate-400 focus:border-slate-400 block w-full p-2.5";

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let cache = use_profile_cache();
    // Held here so messages survive the form remount after a refetch.
    let (message, set_message) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<AppError>>(None);

    let profile = LocalResource::new(move || {
        let token = auth.token();
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
            <div class="max-w-2xl mx-auto">
                <div class="mb-6">
                    <A
                        href=paths::DASHBOARD
                        {..}
                        class="inline-flex items-center px-4 py-2 text-sm font-medium text-slate-700 bg-white border border-slate-300 rounded-lg hover:bg-slate-50"
                    >
                        "Back to dashboard"
                    </A>
                </div>
                <div class="rounded-lg border border-slate-200 bg-white p-6">
                    <h1 class="text-xl font-semibold text-slate-900">"Profile"</h1>
                    <p class="mt-1 text-sm text-slate-500">
                        "View and edit your profile information"
                    </p>
                    {move || {
                        message
                            .get()
                            .map(|text| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Success message=text />
                                    </div>
                                }
                            })
                    }}
                    {move || {
                        error
                            .get()
                            .map(|err| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Error message=err.to_string() />
                                    </div>
                                }
                            })
                    }}
                    <div class="mt-6">
                        <Suspense fallback=move || view! { <Spinner /> }>
                            {move || match profile.get() {
                                Some(Ok(Some(user))) => view! {
                                    <ProfileForm
                                        user=user
                                        set_message=set_message
                                        set_error=set_error
                                    />
                                }
                                .into_any(),
                                Some(Ok(None)) => ().into_any(),
                                Some(Err(err)) => view! {
                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                }
                                .into_any(),
                                None => view! { <Spinner /> }.into_any(),
                            }}
                        </Suspense>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}

#[component]
fn ProfileForm(
    user: User,
    set_message: WriteSignal<Option<String>>,
    set_error: WriteSignal<Option<AppError>>,
) -> impl IntoView {
    let auth = use_auth();
    let cache = use_profile_cache();
    let (name, set_name) = signal(user.name.clone());
    let (original_name, set_original_name) = signal(user.name.clone());
    let email = StoredValue::new(user.email.clone());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());

    let update_action = Action::new_local(move |input: &UpdateProfileRequest| {
        let input = input.clone();
        let token = auth.session.get_untracked().map(|session| session.token);
        async move {
            match token {
                Some(token) => client::update_profile(&input, &token, cache).await,
                None => Err(AppError::Config("Not signed in.".to_string())),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(response) => {
                    set_message.set(Some(response.message.clone()));
                    if let Some(updated) = response.user {
                        set_original_name.set(updated.name.clone());
                        set_name.set(updated.name.clone());
                        // Token unchanged; only the user half is replaced.
                        auth.update_user(updated);
                    } else {
                        set_original_name.set(name.get_untracked());
                    }
                    set_password.set(String::new());
                    set_confirm_password.set(String::new());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let has_changes = Memo::new(move |_| {
        name.get() != original_name.get()
            || !password.get().is_empty()
            || !confirm_password.get().is_empty()
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_message.set(None);

        let name_value = name.get_untracked().trim().to_string();
        if name_value.is_empty() {
            set_error.set(Some(AppError::Validation("Name is required.".to_string())));
            return;
        }

        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();
        let wants_password_change = !password_value.is_empty() || !confirm_value.is_empty();
        if wants_password_change {
            if let Err(err) = validate::validate_new_password(&password_value, &confirm_value) {
                set_error.set(Some(err));
                return;
            }
        }

        update_action.dispatch(UpdateProfileRequest {
            name: name_value,
            password: wants_password_change.then_some(password_value),
            confirm_password: wants_password_change.then_some(confirm_value),
        });
    };

    view! {
        <form class="space-y-5" on:submit=on_submit>
            <div>
                <label class="block mb-2 text-sm font-medium text-slate-700" for="name">
                    "Name"
                </label>
                <input
                    id="name"
                    type="text"
                    class=INPUT_CLASS
                    required
                    prop:value=move || name.get()
                    on:input=move |event| set_name.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class="block mb-2 text-sm font-medium text-slate-700" for="email">
                    "Email"
                </label>
                <input
                    id="email"
                    type="email"
                    class="bg-slate-100 border border-slate-300 text-slate-500 text-sm rounded-lg block w-full p-2.5 cursor-not-allowed"
                    prop:value=email.get_value()
                    readonly
                    disabled
                />
                <p class="mt-1 text-xs text-slate-400">"Email cannot be changed"</p>
            </div>
            <div>
                <label class="block mb-2 text-sm font-medium text-slate-700" for="password">
                    "New password (leave blank to keep current)"
                </label>
                <input
                    id="password"
                    type="password"
                    class=INPUT_CLASS
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
            </div>
            <div>
                <label
                    class="block mb-2 text-sm font-medium text-slate-700"
                    for="confirm_password"
                >
                    "Confirm password"
                </label>
                <input
                    id="confirm_password"
                    type="password"
                    class=INPUT_CLASS
                    autocomplete="new-password"
                    prop:value=move || confirm_password.get()
                    on:input=move |event| set_confirm_password.set(event_target_value(&event))
                />
            </div>
            <Button
                button_type="submit"
                disabled=Signal::derive(move || {
                    update_action.pending().get() || !has_changes.get()
                })
            >
                {move || if update_action.pending().get() { "Saving..." } else { "Save changes" }}
            </Button>
        </form>
    }
}
