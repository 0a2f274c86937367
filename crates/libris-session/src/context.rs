//! Session lifecycle over an injected store.

use chrono::Utc;
use tracing::info;

use libris_model::Record;

use crate::error::{Result, SessionError};
use crate::session::Session;
use crate::store::SessionStore;

/// The current session plus the store it is persisted in.
///
/// Every mutation is written through to the store before it becomes
/// visible in [`SessionContext::current`].
#[derive(Debug)]
pub struct SessionContext<S> {
    store: S,
    current: Session,
}

impl<S: SessionStore> SessionContext<S> {
    /// Read the stored session.
    pub fn load(store: S) -> Result<Self> {
        let current = store.load()?;
        Ok(Self { store, current })
    }

    pub fn current(&self) -> &Session {
        &self.current
    }

    /// Replace the session with a freshly signed-in user. Any linked member
    /// from a previous user is dropped.
    pub fn sign_in(&mut self, user: Record) -> Result<&Session> {
        let next = Session {
            user: Some(user),
            member: None,
            signed_in_at: Some(Utc::now()),
        };
        self.commit(next)?;
        info!(user = ?self.current.user_field("username"), "signed in");
        Ok(&self.current)
    }

    /// Replace the signed-in user's record after a profile edit.
    pub fn update_user(&mut self, user: Record) -> Result<&Session> {
        if !self.current.is_authenticated() {
            return Err(SessionError::NotSignedIn);
        }
        let next = Session {
            user: Some(user),
            ..self.current.clone()
        };
        self.commit(next)?;
        Ok(&self.current)
    }

    /// Link the signed-in user to a library member record.
    pub fn attach_member(&mut self, member: Record) -> Result<&Session> {
        if !self.current.is_authenticated() {
            return Err(SessionError::NotSignedIn);
        }
        let next = Session {
            member: Some(member),
            ..self.current.clone()
        };
        self.commit(next)?;
        let member_id = self.current.member.as_ref().and_then(|m| m.text("memberId"));
        info!(member = ?member_id, "linked member");
        Ok(&self.current)
    }

    /// Clear the user and the member together.
    pub fn sign_out(&mut self) -> Result<()> {
        self.store.clear()?;
        self.current = Session::default();
        info!("signed out");
        Ok(())
    }

    fn commit(&mut self, next: Session) -> Result<()> {
        self.store.save(&next)?;
        self.current = next;
        Ok(())
    }
}
