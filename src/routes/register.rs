//! Registration route. Inputs are validated locally before anything hits the
//! network; the server receives all four fields including the confirmation.

use crate::app_lib::{cache::use_profile_cache, validate, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::types::RegisterRequest;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[derive(Clone)]
/// Captures form input for the async action without borrowing signals.
struct RegisterInput {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
}

/// Renders the sign-up form; a `{message}` success navigates to the login view.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let cache = use_profile_cache();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let register_action = Action::new_local(move |input: &RegisterInput| {
        let input = input.clone();
        async move {
            let request = RegisterRequest {
                name: input.name,
                email: input.email,
                password: input.password,
                confirm_password: input.confirm_password,
            };
            client::register(&request, cache).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => navigate(paths::LOGIN, Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let name_value = name.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        if name_value.is_empty() {
            set_error.set(Some(AppError::Validation("Name is required.".to_string())));
            return;
        }
        if let Err(err) = validate::validate_email(&email_value) {
            set_error.set(Some(err));
            return;
        }
        if let Err(err) = validate::validate_new_password(&password_value, &confirm_value) {
            set_error.set(Some(err));
            return;
        }

        register_action.dispatch(RegisterInput {
            name: name_value,
            email: email_value,
            password: password_value,
            confirm_password: confirm_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-slate-900">"Create account"</h1>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-slate-700" for="name">
                        "Name"
                    </label>
                    <input
                        id="name"
                        type="text"
                        class="bg-slate-50 border border-slate-300 text-slate-900 text-sm rounded-lg focus:ring-slate-400 focus:border-slate-400 block w-full p-2.5"
                        autocomplete="name"
                        required
                        on:input=move |event| set_name.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-slate-700" for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="bg-slate-50 border border-slate-300 text-slate-900 text-sm rounded-lg focus:ring-slate-400 focus:border-slate-400 block w-full p-2.5"
                        autocomplete="email"
                        placeholder="name@example.com"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-slate-700" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="bg-slate-50 border border-slate-300 text-slate-900 text-sm rounded-lg focus:ring-slate-400 focus:border-slate-400 block w-full p-2.5"
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-slate-700"
                        for="confirm_password"
                    >
                        "Confirm password"
                    </label>
                    <input
                        id="confirm_password"
                        type="password"
                        class="bg-slate-50 border border-slate-300 text-slate-900 text-sm rounded-lg focus:ring-slate-400 focus:border-slate-400 block w-full p-2.5"
                        autocomplete="new-password"
                        required
                        on:input=move |event| {
                            set_confirm_password.set(event_target_value(&event));
                        }
                    />
                </div>
                <Button button_type="submit" disabled=register_action.pending()>
                    "Sign up"
                </Button>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
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
                <div class="mt-6 text-center text-sm text-slate-600">
                    "Already have an account? "
                    <A href=paths::LOGIN {..} class="text-slate-900 font-medium hover:underline">
                        "Sign in"
                    </A>
                </div>
            </form>
        </AppShell>
    }
}
