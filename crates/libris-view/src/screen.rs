//! Per-screen configuration: which fields are searched, filtered, sorted
//! and shown, and how many rows a page holds.

use std::num::NonZeroUsize;

use libris_model::{
    BorrowingStatus, EntityKind, MemberStatus, MembershipType, ReservationStatus, Value,
};

use crate::criteria::{Criteria, FilterSelection, SortKey};
use crate::error::{Result, ViewError};
use crate::field::FieldKind;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// A named value offered by a filter dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChoice {
    pub key: String,
    pub label: String,
    pub value: Value,
}

impl FilterChoice {
    pub fn new(key: impl Into<String>, label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value: value.into(),
        }
    }

    /// Choice whose key and value are the same wire string.
    pub fn code(code: &str, label: impl Into<String>) -> Self {
        Self::new(code, label, code)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub choices: Vec<FilterChoice>,
}

impl FilterField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            choices: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_choices(mut self, choices: impl IntoIterator<Item = FilterChoice>) -> Self {
        self.choices = choices.into_iter().collect();
        self
    }

    /// Resolve a raw dropdown value into a selection.
    ///
    /// Choice keys match case-insensitively and yield the choice's value.
    /// Text fields accept values outside the offered choices verbatim; other
    /// kinds must parse.
    pub fn resolve(&self, raw: &str) -> Result<FilterSelection> {
        if FilterSelection::is_sentinel(raw) {
            return Ok(FilterSelection::All);
        }
        let trimmed = raw.trim();
        if let Some(choice) = self
            .choices
            .iter()
            .find(|choice| choice.key.eq_ignore_ascii_case(trimmed))
        {
            return Ok(FilterSelection::Only(choice.value.clone()));
        }
        self.kind
            .parse_value(trimmed)
            .map(FilterSelection::Only)
            .ok_or_else(|| ViewError::InvalidFilterValue {
                field: self.name.clone(),
                kind: self.kind.as_str(),
                raw: raw.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
}

impl SortField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
        }
    }
}

/// A table column for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub field: String,
    pub label: String,
}

impl Column {
    pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
        }
    }
}

/// Configuration of one list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    pub entity: EntityKind,
    pub search_fields: Vec<String>,
    pub filters: Vec<FilterField>,
    pub sort_fields: Vec<SortField>,
    pub default_sort: Option<SortKey>,
    pub page_size: NonZeroUsize,
    pub columns: Vec<Column>,
}

impl ScreenConfig {
    /// Empty configuration: nothing searchable, filterable or sortable.
    pub fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            search_fields: Vec::new(),
            filters: Vec::new(),
            sort_fields: Vec::new(),
            default_sort: None,
            page_size: DEFAULT_PAGE_SIZE,
            columns: Vec::new(),
        }
    }

    /// Built-in configuration for an entity's list screen.
    pub fn for_entity(entity: EntityKind) -> Self {
        match entity {
            EntityKind::Book => Self::books(),
            EntityKind::Member => Self::members(),
            EntityKind::Borrowing => Self::borrowings(),
            EntityKind::Reservation => Self::reservations(),
        }
    }

    /// Book catalog: searched by title, author, genre and location, sorted by
    /// title unless the user picks another column.
    pub fn books() -> Self {
        Self::new(EntityKind::Book)
            .with_search_fields(["title", "author", "genre", "location"])
            .with_filter(
                FilterField::new("availability", "Availability", FieldKind::Flag).with_choices([
                    FilterChoice::new("available", "Available Only", true),
                    FilterChoice::new("unavailable", "Unavailable Only", false),
                ]),
            )
            .with_filter(FilterField::new("genre", "Genre", FieldKind::Text))
            .with_filter(FilterField::new("location", "Location", FieldKind::Text))
            .with_sort_field(SortField::new("title", "Title", FieldKind::Text))
            .with_sort_field(SortField::new("author", "Author", FieldKind::Text))
            .with_sort_field(SortField::new("genre", "Genre", FieldKind::Text))
            .with_sort_field(SortField::new("year", "Year", FieldKind::Number))
            .with_sort_field(SortField::new("language", "Language", FieldKind::Text))
            .with_sort_field(SortField::new(
                "availableCopies",
                "Copies",
                FieldKind::Number,
            ))
            .with_sort_field(SortField::new("availability", "Status", FieldKind::Flag))
            .with_sort_field(SortField::new("location", "Location", FieldKind::Text))
            .with_default_sort(Some(SortKey::asc("title")))
            .with_columns([
                ("title", "Title"),
                ("author", "Author"),
                ("genre", "Genre"),
                ("year", "Year"),
                ("language", "Language"),
                ("availableCopies", "Copies"),
                ("availability", "Status"),
                ("location", "Location"),
            ])
    }

    /// Member directory: insertion order unless a sort is chosen.
    pub fn members() -> Self {
        Self::new(EntityKind::Member)
            .with_search_fields(["firstName", "lastName", "email", "phone", "memberId"])
            .with_filter(
                FilterField::new("membershipType", "Membership Type", FieldKind::Text)
                    .with_choices(
                        MembershipType::ALL
                            .iter()
                            .map(|kind| FilterChoice::code(kind.as_str(), kind.display_name())),
                    ),
            )
            .with_filter(
                FilterField::new("status", "Status", FieldKind::Text).with_choices(
                    MemberStatus::ALL
                        .iter()
                        .map(|status| FilterChoice::code(status.as_str(), status.as_str())),
                ),
            )
            .with_sort_field(SortField::new("firstName", "First Name", FieldKind::Text))
            .with_sort_field(SortField::new("lastName", "Last Name", FieldKind::Text))
            .with_sort_field(SortField::new("email", "Email", FieldKind::Text))
            .with_sort_field(SortField::new(
                "membershipType",
                "Membership",
                FieldKind::Text,
            ))
            .with_sort_field(SortField::new(
                "membershipStartDate",
                "Member Since",
                FieldKind::Date,
            ))
            .with_sort_field(SortField::new(
                "membershipEndDate",
                "Expires",
                FieldKind::Date,
            ))
            .with_sort_field(SortField::new("fineAmount", "Fines", FieldKind::Number))
            .with_columns([
                ("memberId", "Member ID"),
                ("firstName", "First Name"),
                ("lastName", "Last Name"),
                ("email", "Email"),
                ("phone", "Phone"),
                ("membershipType", "Membership"),
                ("status", "Status"),
                ("fineAmount", "Fines"),
            ])
    }

    pub fn borrowings() -> Self {
        Self::new(EntityKind::Borrowing)
            .with_search_fields(["borrowingNumber", "memberId", "bookId"])
            .with_filter(
                FilterField::new("status", "Status", FieldKind::Text).with_choices(
                    BorrowingStatus::ALL
                        .iter()
                        .map(|status| FilterChoice::code(status.as_str(), status.as_str())),
                ),
            )
            .with_sort_field(SortField::new(
                "borrowingNumber",
                "Number",
                FieldKind::Text,
            ))
            .with_sort_field(SortField::new("borrowDate", "Borrowed", FieldKind::Date))
            .with_sort_field(SortField::new("dueDate", "Due", FieldKind::Date))
            .with_sort_field(SortField::new("returnDate", "Returned", FieldKind::Date))
            .with_sort_field(SortField::new("status", "Status", FieldKind::Text))
            .with_sort_field(SortField::new("lateFee", "Late Fee", FieldKind::Number))
            .with_columns([
                ("borrowingNumber", "Number"),
                ("memberId", "Member"),
                ("bookId", "Book"),
                ("borrowDate", "Borrowed"),
                ("dueDate", "Due"),
                ("returnDate", "Returned"),
                ("status", "Status"),
                ("lateFee", "Late Fee"),
            ])
    }

    pub fn reservations() -> Self {
        Self::new(EntityKind::Reservation)
            .with_search_fields(["reservationNumber", "memberId", "bookId"])
            .with_filter(
                FilterField::new("status", "Status", FieldKind::Text).with_choices(
                    ReservationStatus::ALL
                        .iter()
                        .map(|status| FilterChoice::code(status.as_str(), status.as_str())),
                ),
            )
            .with_sort_field(SortField::new(
                "reservationNumber",
                "Number",
                FieldKind::Text,
            ))
            .with_sort_field(SortField::new(
                "reservationDate",
                "Reserved",
                FieldKind::Date,
            ))
            .with_sort_field(SortField::new("status", "Status", FieldKind::Text))
            .with_columns([
                ("reservationNumber", "Number"),
                ("memberId", "Member"),
                ("bookId", "Book"),
                ("reservationDate", "Reserved"),
                ("status", "Status"),
            ])
    }

    #[must_use]
    pub fn with_search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: FilterField) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn with_sort_field(mut self, field: SortField) -> Self {
        self.sort_fields.push(field);
        self
    }

    #[must_use]
    pub fn with_default_sort(mut self, sort: Option<SortKey>) -> Self {
        self.default_sort = sort;
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_columns<'a>(mut self, columns: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        self.columns = columns
            .into_iter()
            .map(|(field, label)| Column::new(field, label))
            .collect();
        self
    }

    /// Page size from a plain integer, rejecting zero.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        self.page_size = NonZeroUsize::new(page_size).ok_or(ViewError::ZeroPageSize)?;
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        self.entity.as_str()
    }

    pub fn sort_field(&self, name: &str) -> Result<&SortField> {
        self.sort_fields
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| ViewError::UnknownSortField {
                screen: self.name(),
                field: name.to_string(),
                available: join_names(self.sort_fields.iter().map(|f| f.name.as_str())),
            })
    }

    pub fn filter_field(&self, name: &str) -> Result<&FilterField> {
        self.filters
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| ViewError::UnknownFilterField {
                screen: self.name(),
                field: name.to_string(),
                available: join_names(self.filters.iter().map(|f| f.name.as_str())),
            })
    }

    /// Kind used to compare a sort field. Unconfigured fields compare as text.
    pub fn sort_kind(&self, name: &str) -> FieldKind {
        self.sort_fields
            .iter()
            .find(|field| field.name == name)
            .map_or(FieldKind::Text, |field| field.kind)
    }

    /// Resolve a `FIELD=VALUE` style pair against this screen.
    pub fn resolve_filter(&self, field: &str, raw: &str) -> Result<FilterSelection> {
        self.filter_field(field)?.resolve(raw)
    }

    /// Validate a sort key against this screen's sortable fields.
    pub fn resolve_sort(&self, sort: SortKey) -> Result<SortKey> {
        self.sort_field(&sort.field)?;
        Ok(sort)
    }

    /// Fresh criteria at mount time: screen default sort, page 1.
    pub fn initial_criteria(&self) -> Criteria {
        Criteria::new().with_sort(self.default_sort.clone())
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
