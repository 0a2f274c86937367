//! The session value itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use libris_model::Record;

/// Who is signed in, and which library member they are linked to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_member_authenticated(&self) -> bool {
        self.member.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.member.is_none()
    }

    /// Text of a field on the signed-in user, e.g. `username`.
    pub fn user_field(&self, field: &str) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.text(field))
    }
}
