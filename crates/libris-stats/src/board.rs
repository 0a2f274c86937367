//! Last-known-good snapshots for dashboard panels.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// How current a panel's figures are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Freshness {
    /// No refresh has ever succeeded.
    Unavailable,
    Fresh { at: DateTime<Utc> },
    /// The latest refresh failed; the figures are from `since`.
    Stale { since: DateTime<Utc>, reason: String },
}

impl Freshness {
    pub fn label(&self) -> &'static str {
        match self {
            Freshness::Unavailable => "unavailable",
            Freshness::Fresh { .. } => "fresh",
            Freshness::Stale { .. } => "stale",
        }
    }
}

/// A panel's snapshot together with its freshness.
///
/// A failed refresh never replaces or alters the last good snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct StatsBoard<T> {
    snapshot: Option<T>,
    freshness: Freshness,
    #[serde(skip)]
    name: &'static str,
}

impl<T> StatsBoard<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            snapshot: None,
            freshness: Freshness::Unavailable,
            name,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn snapshot(&self) -> Option<&T> {
        self.snapshot.as_ref()
    }

    pub fn freshness(&self) -> &Freshness {
        &self.freshness
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self.freshness, Freshness::Fresh { .. })
    }

    pub fn record_success(&mut self, snapshot: T, at: DateTime<Utc>) {
        info!(panel = self.name, "refreshed dashboard panel");
        self.snapshot = Some(snapshot);
        self.freshness = Freshness::Fresh { at };
    }

    /// Keep the previous snapshot and mark it stale. Before any success the
    /// panel stays unavailable.
    pub fn record_failure(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(panel = self.name, %reason, "dashboard refresh failed");
        self.freshness = match &self.freshness {
            Freshness::Unavailable => Freshness::Unavailable,
            Freshness::Fresh { at } => Freshness::Stale { since: *at, reason },
            Freshness::Stale { since, .. } => Freshness::Stale {
                since: *since,
                reason,
            },
        };
    }

    /// Apply the outcome of a refresh attempt.
    pub fn apply<E: std::fmt::Display>(&mut self, outcome: Result<T, E>, at: DateTime<Utc>) {
        match outcome {
            Ok(snapshot) => self.record_success(snapshot, at),
            Err(err) => self.record_failure(err.to_string()),
        }
    }
}
