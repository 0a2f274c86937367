//! Dashboard statistics computed from loaded library collections.
//!
//! Every figure is derived from real records. When a collection cannot be
//! loaded, [`StatsBoard`] keeps the previous figures and marks them stale
//! rather than inventing new ones.

pub mod board;
pub mod books;
pub mod circulation;
pub mod members;

pub use board::{Freshness, StatsBoard};
pub use books::BookStats;
pub use circulation::{CirculationInput, CirculationStats, round_cents};
pub use members::MemberStats;
