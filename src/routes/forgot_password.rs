//! Password-reset route. Hosts the three-stage flow machine from
//! `features::reset::flow`: email submission, OTP verification, then the
//! new-password form. Each stage issues its call only on submit, so ordering
//! is enforced here rather than in the network layer. The flow is
//! component-local state and restarts at the email stage on reload.

use crate::app_lib::{cache::use_profile_cache, validate, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::types::{
    ForgotPasswordRequest, ResetPasswordRequest, VerifyOtpRequest,
};
use crate::features::reset::flow::ResetFlow;
use crate::routes::paths;
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

/// Delay before leaving the success message for the login view.
const REDIRECT_DELAY_MS: u32 = 2_000;

const INPUT_CLASS: &str = "bg-slate-50 border border-slate-300 text-slate-900 text-sm rounded-lg focus:ring-slate-400 focus:border-slate-400 block w-full p-2.5";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let flow = RwSignal::new(ResetFlow::new());

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                {move || match flow.get() {
                    ResetFlow::Email => view! { <EmailStage flow=flow /> }.into_any(),
                    ResetFlow::Otp { email, dev_otp } => {
                        view! { <OtpStage flow=flow email=email dev_otp=dev_otp /> }.into_any()
                    }
                    ResetFlow::Reset { email, otp } => {
                        view! { <ResetStage flow=flow email=email otp=otp /> }.into_any()
                    }
                }}
                <div class="mt-6 text-center">
                    <A href=paths::LOGIN {..} class="text-sm text-slate-600 hover:underline">
                        "Back to login"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}

/// Initial stage: collect the account email and request an OTP.
#[component]
fn EmailStage(flow: RwSignal<ResetFlow>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (submitted_email, set_submitted_email) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let send_action = Action::new_local(move |email_value: &String| {
        let request = ForgotPasswordRequest {
            email: email_value.clone(),
        };
        async move { client::forgot_password(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(response) => {
                    // A development-mode server may return the OTP inline; it
                    // rides along for display on the next stage.
                    let next = flow
                        .get_untracked()
                        .otp_sent(submitted_email.get_untracked(), response.otp);
                    if let Some(next) = next {
                        flow.set(next);
                    }
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        if let Err(err) = validate::validate_email(&email_value) {
            set_error.set(Some(err));
            return;
        }

        set_submitted_email.set(email_value.clone());
        send_action.dispatch(email_value);
    };

    view! {
        <form on:submit=on_submit>
            <h1 class="mb-2 text-2xl font-semibold text-slate-900">"Forgot password"</h1>
            <p class="mb-6 text-sm text-slate-500">
                "Enter your email address and we'll send you a one-time code."
            </p>
            <div class="mb-5">
                <label class="block mb-2 text-sm font-medium text-slate-700" for="email">
                    "Email"
                </label>
                <input
                    id="email"
                    type="email"
                    class=INPUT_CLASS
                    autocomplete="email"
                    placeholder="name@example.com"
                    required
                    on:input=move |event| set_email.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" disabled=send_action.pending()>
                "Send code"
            </Button>
            {move || {
                send_action
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
        </form>
    }
}

/// Second stage: verify the 6-digit code. Input is digit-filtered as typed
/// and rejected locally unless exactly six digits long.
#[component]
fn OtpStage(
    flow: RwSignal<ResetFlow>,
    email: String,
    dev_otp: Option<String>,
) -> impl IntoView {
    let email = StoredValue::new(email);
    let (code, set_code) = signal(String::new());
    let (submitted_code, set_submitted_code) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let verify_action = Action::new_local(move |code_value: &String| {
        let request = VerifyOtpRequest {
            email: email.get_value(),
            otp: code_value.clone(),
        };
        async move { client::verify_otp(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(response) if response.verified => {
                    // The verified code travels with the stage as proof for
                    // the final submission.
                    let next = flow
                        .get_untracked()
                        .otp_verified(submitted_code.get_untracked());
                    if let Some(next) = next {
                        flow.set(next);
                    }
                }
                Ok(_) => {
                    set_error.set(Some(AppError::Validation(
                        "Invalid or expired code.".to_string(),
                    )));
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let code_value = code.get_untracked();
        if let Err(err) = validate::validate_otp(&code_value) {
            set_error.set(Some(err));
            return;
        }

        set_submitted_code.set(code_value.clone());
        verify_action.dispatch(code_value);
    };

    let on_back = move |_| {
        if let Some(previous) = flow.get_untracked().back() {
            flow.set(previous);
        }
    };

    view! {
        <form on:submit=on_submit>
            <h1 class="mb-2 text-2xl font-semibold text-slate-900">"Check your email"</h1>
            <p class="mb-6 text-sm text-slate-500">
                {format!("We sent a 6-digit code to {}.", email.get_value())}
            </p>
            {dev_otp
                .map(|otp| {
                    view! {
                        <div class="mb-5">
                            <Alert
                                kind=AlertKind::Info
                                message=format!("Development code: {otp}")
                            />
                        </div>
                    }
                })}
            <div class="mb-5">
                <label class="block mb-2 text-sm font-medium text-slate-700" for="otp">
                    "Verification code"
                </label>
                <input
                    id="otp"
                    type="text"
                    class=INPUT_CLASS
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    placeholder="000000"
                    prop:value=move || code.get()
                    on:input=move |event| {
                        set_code.set(validate::normalize_otp_input(&event_target_value(&event)));
                    }
                />
            </div>
            <Button button_type="submit" disabled=verify_action.pending()>
                "Verify code"
            </Button>
            {move || {
                verify_action
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
            <div class="mt-4 text-center">
                <button
                    type="button"
                    class="text-sm text-slate-600 underline underline-offset-4 hover:text-slate-900"
                    on:click=on_back
                >
                    "Use a different email"
                </button>
            </div>
        </form>
    }
}

/// Final stage: set the new password. Local validation runs first so empty,
/// short, or mismatched fields never reach the network.
#[component]
fn ResetStage(flow: RwSignal<ResetFlow>, email: String, otp: String) -> impl IntoView {
    let navigate = use_navigate();
    let cache = use_profile_cache();
    let email = StoredValue::new(email);
    let otp = StoredValue::new(otp);
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (done, set_done) = signal(false);

    let reset_action = Action::new_local(move |input: &(String, String)| {
        let (new_password, confirm_password) = input.clone();
        let request = ResetPasswordRequest {
            email: email.get_value(),
            otp: otp.get_value(),
            new_password,
            confirm_password,
        };
        async move { client::reset_password(&request, cache).await }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(_) => {
                    set_done.set(true);
                    let navigate = navigate.clone();
                    Timeout::new(REDIRECT_DELAY_MS, move || {
                        navigate(paths::LOGIN, Default::default());
                    })
                    .forget();
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let password_value = new_password.get_untracked();
        let confirm_value = confirm_password.get_untracked();
        if let Err(err) = validate::validate_new_password(&password_value, &confirm_value) {
            set_error.set(Some(err));
            return;
        }

        reset_action.dispatch((password_value, confirm_value));
    };

    let on_back = move |_| {
        if let Some(previous) = flow.get_untracked().back() {
            flow.set(previous);
        }
    };

    view! {
        <form on:submit=on_submit>
            <h1 class="mb-2 text-2xl font-semibold text-slate-900">"Set a new password"</h1>
            <p class="mb-6 text-sm text-slate-500">"Enter your new password below."</p>
            <div class="mb-5">
                <label class="block mb-2 text-sm font-medium text-slate-700" for="new_password">
                    "New password"
                </label>
                <input
                    id="new_password"
                    type="password"
                    class=INPUT_CLASS
                    autocomplete="new-password"
                    required
                    on:input=move |event| set_new_password.set(event_target_value(&event))
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
                    class=INPUT_CLASS
                    autocomplete="new-password"
                    required
                    on:input=move |event| set_confirm_password.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" disabled=Signal::derive(move || {
                reset_action.pending().get() || done.get()
            })>
                "Reset password"
            </Button>
            {move || {
                reset_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                done.get()
                    .then_some(view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Success
                                message="Password reset successful! Redirecting to sign in..."
                                    .to_string()
                            />
                        </div>
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
            <div class="mt-4 text-center">
                <button
                    type="button"
                    class="text-sm text-slate-600 underline underline-offset-4 hover:text-slate-900"
                    on:click=on_back
                >
                    "Back to code entry"
                </button>
            </div>
        </form>
    }
}
