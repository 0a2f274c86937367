use thiserror::Error;

/// Invalid screen configuration or criteria input.
///
/// The transformation itself never fails; these errors come from resolving
/// user-supplied names (sort field, filter field, filter value) against a
/// screen configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("{screen} has no sortable field `{field}` (sortable: {available})")]
    UnknownSortField {
        screen: &'static str,
        field: String,
        available: String,
    },

    #[error("{screen} has no filterable field `{field}` (filterable: {available})")]
    UnknownFilterField {
        screen: &'static str,
        field: String,
        available: String,
    },

    #[error("`{raw}` is not a valid {kind} value for `{field}`")]
    InvalidFilterValue {
        field: String,
        kind: &'static str,
        raw: String,
    },

    #[error("expected FIELD=VALUE, got `{0}`")]
    MalformedFilter(String),

    #[error("page size must be at least 1")]
    ZeroPageSize,
}

pub type Result<T> = std::result::Result<T, ViewError>;
