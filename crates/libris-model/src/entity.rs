//! Entity kinds and the status vocabularies the backend uses for them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The four collections the client lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Book,
    Member,
    Borrowing,
    Reservation,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Book,
        EntityKind::Member,
        EntityKind::Borrowing,
        EntityKind::Reservation,
    ];

    /// Collection name, also used as the screen name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Book => "books",
            EntityKind::Member => "members",
            EntityKind::Borrowing => "borrowings",
            EntityKind::Reservation => "reservations",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ModelError;

    /// Accepts singular or plural names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
        match singular {
            "book" => Ok(EntityKind::Book),
            "member" => Ok(EntityKind::Member),
            "borrowing" => Ok(EntityKind::Borrowing),
            "reservation" => Ok(EntityKind::Reservation),
            _ => Err(ModelError::unknown("entity kind", s)),
        }
    }
}

/// Lifecycle of a borrowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BorrowingStatus {
    Active,
    Returned,
}

impl BorrowingStatus {
    pub const ALL: [BorrowingStatus; 2] = [BorrowingStatus::Active, BorrowingStatus::Returned];

    pub fn as_str(&self) -> &'static str {
        match self {
            BorrowingStatus::Active => "ACTIVE",
            BorrowingStatus::Returned => "RETURNED",
        }
    }
}

/// Lifecycle of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    Pending,
    Received,
    Cancelled,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 3] = [
        ReservationStatus::Pending,
        ReservationStatus::Received,
        ReservationStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Received => "RECEIVED",
            ReservationStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Account status of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberStatus {
    Active,
    Suspended,
    Expired,
    Pending,
}

impl MemberStatus {
    pub const ALL: [MemberStatus; 4] = [
        MemberStatus::Active,
        MemberStatus::Suspended,
        MemberStatus::Expired,
        MemberStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "ACTIVE",
            MemberStatus::Suspended => "SUSPENDED",
            MemberStatus::Expired => "EXPIRED",
            MemberStatus::Pending => "PENDING",
        }
    }
}

macro_rules! status_string_impls {
    ($($ty:ident => $kind:literal),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = ModelError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    let normalized = s.trim();
                    Self::ALL
                        .into_iter()
                        .find(|status| status.as_str().eq_ignore_ascii_case(normalized))
                        .ok_or_else(|| ModelError::unknown($kind, s))
                }
            }
        )*
    };
}

status_string_impls! {
    BorrowingStatus => "borrowing status",
    ReservationStatus => "reservation status",
    MemberStatus => "member status",
}
