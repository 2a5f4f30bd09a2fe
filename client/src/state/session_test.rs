use super::*;
use crate::util::storage::MemoryStore;

fn alice() -> User {
    User {
        id: Some(1),
        username: "alice".to_owned(),
        role_name: None,
        permissions: vec!["SLOW_QUERY_VIEW".to_owned()],
        roles: vec![],
    }
}

#[test]
fn empty_store_has_no_session() {
    let session = SessionStore::new(MemoryStore::default());
    assert!(!session.has_token());
    assert!(session.user().is_none());
    assert!(session.bearer().is_none());
}

#[test]
fn save_persists_token_and_user_under_fixed_keys() {
    let session = SessionStore::new(MemoryStore::default());
    session.save("t1", &alice());
    assert_eq!(session.store().get(TOKEN_KEY).as_deref(), Some("t1"));
    assert!(session.store().get(USER_KEY).is_some());
    assert_eq!(session.token().as_deref(), Some("t1"));
    assert_eq!(session.user(), Some(alice()));
    assert_eq!(session.bearer().as_deref(), Some("Bearer t1"));
}

#[test]
fn blank_token_counts_as_absent() {
    let session = SessionStore::new(MemoryStore::default());
    session.store().set(TOKEN_KEY, "   ");
    assert!(!session.has_token());
}

#[test]
fn clear_removes_token_and_user() {
    let session = SessionStore::new(MemoryStore::default());
    session.save("t1", &alice());
    session.clear();
    assert!(session.token().is_none());
    assert!(session.user().is_none());
}

#[test]
fn save_user_keeps_token() {
    let session = SessionStore::new(MemoryStore::default());
    session.save("t1", &alice());
    let mut updated = alice();
    updated.roles.push("ADMIN".to_owned());
    session.save_user(&updated);
    assert_eq!(session.token().as_deref(), Some("t1"));
    assert_eq!(session.user().map(|u| u.roles), Some(vec!["ADMIN".to_owned()]));
}
