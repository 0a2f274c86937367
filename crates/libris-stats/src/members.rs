//! Membership figures.

use std::collections::BTreeMap;

use serde::Serialize;

use libris_model::{MemberStatus, Record};

/// Member counts by status, membership type and outstanding fines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub total: usize,
    pub active: usize,
    pub suspended: usize,
    /// Keyed by the raw `membershipType` value, so types outside the
    /// canonical catalog are still counted.
    pub by_type: BTreeMap<String, usize>,
    pub with_fines: usize,
}

impl MemberStats {
    pub fn compute(members: &[Record]) -> Self {
        let mut stats = Self {
            total: members.len(),
            ..Self::default()
        };
        for member in members {
            if is_active(member) {
                stats.active += 1;
            }
            if member.text("status") == Some(MemberStatus::Suspended.as_str()) {
                stats.suspended += 1;
            }
            if let Some(kind) = member.text("membershipType") {
                *stats.by_type.entry(kind.to_string()).or_default() += 1;
            }
            if member.number("fineAmount").is_some_and(|fine| fine > 0.0) {
                stats.with_fines += 1;
            }
        }
        stats
    }

    pub fn count_of(&self, membership_type: &str) -> usize {
        self.by_type.get(membership_type).copied().unwrap_or(0)
    }
}

/// `status == ACTIVE`; records without a status fall back to `isActive`.
fn is_active(member: &Record) -> bool {
    match member.get("status") {
        Some(status) if !status.is_null() => {
            status.as_str() == Some(MemberStatus::Active.as_str())
        }
        _ => member.flag("isActive") == Some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_is_active_flag_counts_without_status() {
        let members = vec![
            Record::new().with("isActive", true),
            Record::new().with("status", "SUSPENDED").with("isActive", true),
            Record::new().with("status", "ACTIVE"),
        ];
        let stats = MemberStats::compute(&members);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.suspended, 1);
    }

    #[test]
    fn counts_types_and_fines() {
        let members = vec![
            Record::new().with("membershipType", "STUDENT").with("fineAmount", 2.5),
            Record::new().with("membershipType", "STUDENT").with("fineAmount", 0),
            Record::new().with("membershipType", "FAMILY"),
        ];
        let stats = MemberStats::compute(&members);
        assert_eq!(stats.count_of("STUDENT"), 2);
        assert_eq!(stats.count_of("FAMILY"), 1);
        assert_eq!(stats.count_of("PREMIUM"), 0);
        assert_eq!(stats.with_fines, 1);
    }
}
