#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::util::storage::KeyValue;

/// Durable-store key for the raw session token.
pub const TOKEN_KEY: &str = "token";
/// Durable-store key for the JSON-serialized user.
pub const USER_KEY: &str = "user";
/// Ephemeral-store key stashed for the payment step.
pub const USER_ID_KEY: &str = "userId";

/// Authentication state shared via context: the signed-in session, if any.
///
/// `loading` is true until the one-shot restore from the durable store has
/// run, so route guards wait for the answer instead of redirecting early.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// State for a freshly signed-in (or restored) session.
    pub fn signed_in(token: String, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            loading: false,
        }
    }

    /// Signed-out state with the restore already settled.
    pub fn signed_out() -> Self {
        Self {
            token: None,
            user: None,
            loading: false,
        }
    }
}

/// Write the session to the durable store: raw token plus the user as JSON.
pub fn persist_session(store: &impl KeyValue, token: &str, user: &User) {
    store.set(TOKEN_KEY, token);
    if let Ok(json) = serde_json::to_string(user) {
        store.set(USER_KEY, &json);
    }
}

/// Read a previously persisted session back from the durable store.
///
/// Returns `None` when either key is absent or the stored user no longer
/// parses (stale format); callers treat that as signed out.
pub fn restore_session(store: &impl KeyValue) -> Option<(String, User)> {
    let token = store.get(TOKEN_KEY)?;
    let user = serde_json::from_str(&store.get(USER_KEY)?).ok()?;
    Some((token, user))
}

/// Remove the durable session (sign-out).
pub fn clear_session(store: &impl KeyValue) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

/// Stash the user id for the payment flow in the ephemeral store.
pub fn stash_pending_user(store: &impl KeyValue, user_id: &str) {
    store.set(USER_ID_KEY, user_id);
}

/// Read the stashed payment-flow user id back, if the stash is still there.
pub fn pending_user(store: &impl KeyValue) -> Option<String> {
    store.get(USER_ID_KEY)
}
