//! Data model for the library client: primitive values, entity records,
//! raw collections and the catalog enumerations shared by every screen.

pub mod entity;
pub mod error;
pub mod membership;
pub mod record;
pub mod value;

pub use entity::{BorrowingStatus, EntityKind, MemberStatus, ReservationStatus};
pub use error::{ModelError, Result};
pub use membership::MembershipType;
pub use record::{ID_FIELDS, RawCollection, Record};
pub use value::{Value, format_number};
