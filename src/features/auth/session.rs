//! Persistent session storage under two fixed localStorage keys. The user and
//! token are written and removed together; hydration yields a session only
//! when both halves are present and the user JSON parses. A partial pair is
//! treated as no session and both keys are dropped.

use crate::features::auth::types::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// An authenticated session. User and token always travel together; callers
/// hold an `Option<Session>`, never one half without the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Rebuilds a session from raw storage values. Returns `None` unless a
/// non-empty token and a parseable user are both present.
pub fn hydrate(token: Option<String>, user_json: Option<String>) -> Option<Session> {
    let token = token?.trim().to_string();
    if token.is_empty() {
        return None;
    }
    let user = serde_json::from_str::<User>(&user_json?).ok()?;
    Some(Session { user, token })
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
}

/// Reads both keys at startup. Partial or corrupt pairs are cleared so the
/// store never rehydrates into a half-session.
#[cfg(target_arch = "wasm32")]
pub fn load() -> Option<Session> {
    let storage = local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    let user_json = storage.get_item(USER_KEY).ok().flatten();
    let had_any = token.is_some() || user_json.is_some();

    let session = hydrate(token, user_json);
    if session.is_none() && had_any {
        clear();
    }
    session
}

/// Stores both halves of the session.
#[cfg(target_arch = "wasm32")]
pub fn persist(session: &Session) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        if let Ok(json) = serde_json::to_string(&session.user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

/// Replaces the stored user after a profile update; the token is untouched.
#[cfg(target_arch = "wasm32")]
pub fn persist_user(user: &User) {
    if let Some(storage) = local_storage() {
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

/// Removes both keys. Idempotent.
#[cfg(target_arch = "wasm32")]
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::hydrate;

    fn user_json() -> String {
        r#"{"id":1,"name":"Ada","email":"ada@b.com"}"#.to_string()
    }

    #[test]
    fn hydrates_only_when_both_halves_are_present() {
        let session = hydrate(Some("tok".to_string()), Some(user_json()))
            .expect("both halves should hydrate");
        assert_eq!(session.token, "tok");
        assert_eq!(session.user.email, "ada@b.com");

        assert!(hydrate(Some("tok".to_string()), None).is_none());
        assert!(hydrate(None, Some(user_json())).is_none());
        assert!(hydrate(None, None).is_none());
    }

    #[test]
    fn rejects_empty_tokens_and_corrupt_user_json() {
        assert!(hydrate(Some("  ".to_string()), Some(user_json())).is_none());
        assert!(hydrate(Some("tok".to_string()), Some("not json".to_string())).is_none());
        assert!(hydrate(Some("tok".to_string()), Some("{}".to_string())).is_none());
    }
}
