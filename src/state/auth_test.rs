use super::*;
use crate::util::storage::MemoryStore;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        nombre: Some("Ana".to_owned()),
        correo: Some("ana@example.com".to_owned()),
        is_approved: true,
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

#[test]
fn signed_in_has_user_and_is_settled() {
    let state = AuthState::signed_in("t1".to_owned(), user());
    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("t1"));
    assert_eq!(state.user, Some(user()));
}

#[test]
fn signed_out_is_settled() {
    let state = AuthState::signed_out();
    assert!(!state.loading);
    assert!(state.user.is_none());
}

// =============================================================
// Session persistence
// =============================================================

#[test]
fn persist_then_restore_round_trips() {
    let store = MemoryStore::default();

    persist_session(&store, "t1", &user());

    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t1"));
    let stored_user = store.get(USER_KEY).expect("user persisted");
    assert!(stored_user.contains("\"_id\":\"u1\""));

    let (token, restored) = restore_session(&store).expect("session restored");
    assert_eq!(token, "t1");
    assert_eq!(restored, user());
}

#[test]
fn restore_without_token_is_none() {
    let store = MemoryStore::default();
    store.set(USER_KEY, "{\"_id\":\"u1\",\"isApproved\":true}");

    assert_eq!(restore_session(&store), None);
}

#[test]
fn restore_without_user_is_none() {
    let store = MemoryStore::default();
    store.set(TOKEN_KEY, "t1");

    assert_eq!(restore_session(&store), None);
}

#[test]
fn restore_with_stale_user_json_is_none() {
    let store = MemoryStore::default();
    store.set(TOKEN_KEY, "t1");
    store.set(USER_KEY, "not json");

    assert_eq!(restore_session(&store), None);
}

#[test]
fn clear_session_removes_both_keys() {
    let store = MemoryStore::default();
    persist_session(&store, "t1", &user());

    clear_session(&store);

    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
}

// =============================================================
// Payment stash
// =============================================================

#[test]
fn stash_pending_user_sets_user_id_key() {
    let store = MemoryStore::default();

    stash_pending_user(&store, "u7");

    assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("u7"));
    assert_eq!(pending_user(&store).as_deref(), Some("u7"));
}

#[test]
fn pending_user_without_stash_is_none() {
    let store = MemoryStore::default();
    assert_eq!(pending_user(&store), None);
}
