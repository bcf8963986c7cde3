mod dashboard;
mod forgot_password;
mod login;
mod not_found;
mod profile;
mod register;

pub(crate) use dashboard::DashboardPage;
pub(crate) use forgot_password::ForgotPasswordPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;
pub(crate) use register::RegisterPage;

use crate::features::auth::RequireAuth;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::{path, NavigateOptions};

/// Route path constants shared by navigation and guards.
pub(crate) mod paths {
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const FORGOT_PASSWORD: &str = "/forgot-password";
    pub const DASHBOARD: &str = "/dashboard";
    pub const PROFILE: &str = "/profile";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route
                path=path!("/")
                view=|| {
                    view! {
                        <Redirect
                            path=paths::DASHBOARD
                            options=NavigateOptions {
                                replace: true,
                                ..Default::default()
                            }
                        />
                    }
                }
            />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/forgot-password") view=ForgotPasswordPage />
            <Route
                path=path!("/dashboard")
                view=|| {
                    view! {
                        <RequireAuth>
                            <DashboardPage />
                        </RequireAuth>
                    }
                }
            />
            <Route
                path=path!("/profile")
                view=|| {
                    view! {
                        <RequireAuth>
                            <ProfilePage />
                        </RequireAuth>
                    }
                }
            />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
