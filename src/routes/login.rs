use crate::app_lib::{cache::use_profile_cache, validate, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::LoginRequest;
use crate::features::auth::client;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

/// Renders the sign-in form. On success the returned user and token are
/// stored together in the session store and the user lands on the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let cache = use_profile_cache();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move {
            let request = LoginRequest {
                email: input.email,
                password: input.password,
            };
            client::login(&request, cache).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(response) => {
                    auth.set_auth(response.user, response.token);
                    navigate(paths::DASHBOARD, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Validation(
                "Email and password are required.".to_string(),
            )));
            return;
        }
        if let Err(err) = validate::validate_email(&email_value) {
            set_error.set(Some(err));
            return;
        }

        login_action.dispatch(LoginInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-slate-900">
                    "Sign in to your account"
                </h1>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-slate-700"
                        for="email"
                    >
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
                    <label
                        class="block mb-2 text-sm font-medium text-slate-700"
                        for="password"
                    >
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="bg-slate-50 border border-slate-300 text-slate-900 text-sm rounded-lg focus:ring-slate-400 focus:border-slate-400 block w-full p-2.5"
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5 text-right">
                    <A
                        href=paths::FORGOT_PASSWORD
                        {..}
                        class="text-sm text-slate-600 hover:underline"
                    >
                        "Forgot password?"
                    </A>
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign in"
                </Button>
                {move || {
                    login_action
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
                    "Don't have an account? "
                    <A href=paths::REGISTER {..} class="text-slate-900 font-medium hover:underline">
                        "Sign up"
                    </A>
                </div>
            </form>
        </AppShell>
    }
}
