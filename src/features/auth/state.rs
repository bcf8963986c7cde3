//! Auth session state and context for the frontend. The provider hydrates the
//! session once at mount from persistent storage and exposes derived auth
//! signals for guards and routes. Mutation happens only through the defined
//! operations, always keeping memory and storage in step.

use crate::features::auth::{
    session,
    session::Session,
    types::User,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<Session>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Option<Session>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
        }
    }

    /// Stores user and token together, in memory and in persistent storage.
    pub fn set_auth(&self, user: User, token: String) {
        let session = Session { user, token };
        session::persist(&session);
        self.session.set(Some(session));
    }

    /// Replaces the user after a profile update; the token is unchanged.
    pub fn update_user(&self, user: User) {
        session::persist_user(&user);
        self.session.update(|current| {
            if let Some(session) = current {
                session.user = user;
            }
        });
    }

    /// Clears memory and persistent storage. Idempotent.
    pub fn logout(&self) {
        session::clear();
        self.session.set(None);
    }

    /// Current bearer token, if any. Reactive.
    pub fn token(&self) -> Option<String> {
        self.session.get().map(|session| session.token)
    }
}

/// Provides auth context, rehydrated from storage before the first render.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(session::load());
    let auth = AuthContext::new(session);
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(RwSignal::new(None)))
}
