//! List-view transformation for the library client's list screens.
//!
//! A [`ListView`] owns one screen's raw collection and [`Criteria`]; asking
//! it for a [`DerivedView`] runs search, category filters, sort and
//! pagination in that order. Each stage is also exposed as a free function
//! so it can be used on its own.
//!
//! ```
//! use libris_model::{RawCollection, Record};
//! use libris_view::{ListView, ScreenConfig};
//!
//! let books = RawCollection::new(vec![
//!     Record::new().with("title", "Zeta").with("genre", "SciFi"),
//!     Record::new().with("title", "Alpha").with("genre", "Drama"),
//! ]);
//! let mut view = ListView::new(ScreenConfig::books()).with_collection(books);
//! view.set_filter("genre", "SciFi").unwrap();
//! let derived = view.view();
//! let titles: Vec<_> = derived.items().iter().filter_map(|r| r.text("title")).collect();
//! assert_eq!(titles, ["Zeta"]);
//! ```

pub mod criteria;
pub mod error;
pub mod field;
pub mod filter;
pub mod paginate;
pub mod screen;
pub mod search;
pub mod sort;
pub mod transform;

pub use criteria::{Criteria, FilterSelection, SortDirection, SortKey, split_filter_arg};
pub use error::{Result, ViewError};
pub use field::{FieldKind, parse_date};
pub use filter::{matches_all, matches_filter};
pub use paginate::{PageInfo, page_range, paginate, total_pages};
pub use screen::{Column, DEFAULT_PAGE_SIZE, FilterChoice, FilterField, ScreenConfig, SortField};
pub use search::matches_search;
pub use sort::{compare_records, sort_records};
pub use transform::{DerivedView, ListView, derive};
