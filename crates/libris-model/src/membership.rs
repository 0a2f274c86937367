//! Membership catalog.
//!
//! Each membership type fixes how long a membership runs, how many books a
//! member may hold at once and the daily late fee.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MembershipType {
    Student,
    Faculty,
    Regular,
    Premium,
}

impl MembershipType {
    pub const ALL: [MembershipType; 4] = [
        MembershipType::Student,
        MembershipType::Faculty,
        MembershipType::Regular,
        MembershipType::Premium,
    ];

    /// Wire name stored on member records.
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipType::Student => "STUDENT",
            MembershipType::Faculty => "FACULTY",
            MembershipType::Regular => "REGULAR",
            MembershipType::Premium => "PREMIUM",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MembershipType::Student => "Student",
            MembershipType::Faculty => "Faculty",
            MembershipType::Regular => "Regular",
            MembershipType::Premium => "Premium",
        }
    }

    pub fn duration_years(&self) -> u32 {
        match self {
            MembershipType::Student | MembershipType::Regular => 1,
            MembershipType::Faculty | MembershipType::Premium => 2,
        }
    }

    /// Maximum number of books held at once.
    pub fn borrowing_limit(&self) -> u32 {
        match self {
            MembershipType::Student => 5,
            MembershipType::Faculty => 10,
            MembershipType::Regular => 3,
            MembershipType::Premium => 15,
        }
    }

    pub fn daily_fine_rate(&self) -> f64 {
        match self {
            MembershipType::Student => 0.50,
            MembershipType::Faculty => 0.25,
            MembershipType::Regular => 1.00,
            MembershipType::Premium => 0.10,
        }
    }

    /// Late fee for a number of overdue days.
    pub fn fine_for(&self, overdue_days: u32) -> f64 {
        let fine = self.daily_fine_rate() * f64::from(overdue_days);
        (fine * 100.0).round() / 100.0
    }
}

impl fmt::Display for MembershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for MembershipType {
    type Err = ModelError;

    /// Matches the wire name or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.as_str().eq_ignore_ascii_case(normalized)
                    || kind.display_name().eq_ignore_ascii_case(normalized)
            })
            .ok_or_else(|| ModelError::unknown("membership type", s))
    }
}
