//! Session storage backends.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::Result;
use crate::session::Session;

/// Where the session lives between runs.
pub trait SessionStore {
    /// Load the stored session; an absent session loads as empty.
    fn load(&self) -> Result<Session>;

    fn save(&self, session: &Session) -> Result<()>;

    /// Remove every stored session key.
    fn clear(&self) -> Result<()>;
}

/// In-memory store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<Session>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(session))),
        }
    }

    /// Whether anything has been saved and not cleared.
    pub fn is_occupied(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Session> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slot.clone().unwrap_or_default())
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn load(&self) -> Result<Session> {
        (**self).load()
    }

    fn save(&self, session: &Session) -> Result<()> {
        (**self).save(session)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
