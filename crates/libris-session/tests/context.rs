//! Session lifecycle against both stores.

use libris_model::Record;
use libris_session::{
    FileSessionStore, MemoryStore, Session, SessionContext, SessionError, SessionStore,
};
use tempfile::tempdir;

fn user() -> Record {
    Record::new()
        .with("id", 7)
        .with("username", "librarian")
        .with("email", "desk@example.org")
}

fn member() -> Record {
    Record::new()
        .with("memberId", "MEM-0042")
        .with("membershipType", "FACULTY")
}

#[test]
fn sign_in_then_link_member() {
    let store = MemoryStore::new();
    let mut ctx = SessionContext::load(store.clone()).unwrap();
    assert!(!ctx.current().is_authenticated());

    ctx.sign_in(user()).unwrap();
    let session = ctx.attach_member(member()).unwrap();
    assert!(session.is_authenticated());
    assert!(session.is_member_authenticated());
    assert!(session.signed_in_at.is_some());

    assert_eq!(&store.load().unwrap(), ctx.current());
}

#[test]
fn loading_restores_a_stored_session() {
    let stored = Session {
        user: Some(user()),
        member: Some(member()),
        signed_in_at: None,
    };
    let store = MemoryStore::with_session(stored.clone());
    let mut ctx = SessionContext::load(store.clone()).unwrap();
    assert_eq!(ctx.current(), &stored);

    ctx.sign_out().unwrap();
    assert!(ctx.current().is_empty());
    assert!(!store.is_occupied());
}

#[test]
fn member_link_requires_a_user() {
    let mut ctx = SessionContext::load(MemoryStore::new()).unwrap();
    let err = ctx.attach_member(member()).unwrap_err();
    assert!(matches!(err, SessionError::NotSignedIn));
    assert!(ctx.current().is_empty());
}

#[test]
fn sign_out_clears_user_and_member_together() {
    let store = MemoryStore::new();
    let mut ctx = SessionContext::load(&store).unwrap();
    ctx.sign_in(user()).unwrap();
    ctx.attach_member(member()).unwrap();

    ctx.sign_out().unwrap();
    assert!(ctx.current().is_empty());
    assert!(!store.is_occupied());
}

#[test]
fn signing_in_again_drops_previous_member() {
    let mut ctx = SessionContext::load(MemoryStore::new()).unwrap();
    ctx.sign_in(user()).unwrap();
    ctx.attach_member(member()).unwrap();

    let session = ctx.sign_in(Record::new().with("username", "other")).unwrap();
    assert!(!session.is_member_authenticated());
    assert_eq!(session.user_field("username"), Some("other"));
}

#[test]
fn profile_edit_keeps_member_link() {
    let mut ctx = SessionContext::load(MemoryStore::new()).unwrap();
    ctx.sign_in(user()).unwrap();
    ctx.attach_member(member()).unwrap();

    let edited = user().with("email", "front@example.org");
    let session = ctx.update_user(edited).unwrap();
    assert_eq!(session.user_field("email"), Some("front@example.org"));
    assert!(session.is_member_authenticated());
}

#[test]
fn file_store_survives_a_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let mut ctx = SessionContext::load(FileSessionStore::new(&path)).unwrap();
        ctx.sign_in(user()).unwrap();
        ctx.attach_member(member()).unwrap();
    }

    let ctx = SessionContext::load(FileSessionStore::new(&path)).unwrap();
    assert_eq!(ctx.current().user_field("username"), Some("librarian"));
    assert_eq!(
        ctx.current().member.as_ref().and_then(|m| m.text("memberId")),
        Some("MEM-0042")
    );

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["version"], 1);
    assert_eq!(raw["session"]["user"]["id"], 7);
}
