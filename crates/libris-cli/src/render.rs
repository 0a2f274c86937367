//! Terminal and JSON rendering of command results.

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde_json::json;

use libris_model::{MembershipType, Record, Value, format_number};
use libris_session::Session;
use libris_stats::{BookStats, CirculationStats, Freshness, MemberStats, StatsBoard};
use libris_view::{Criteria, DerivedView, FilterSelection, PageInfo, ScreenConfig, SortDirection};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().copied().map(header_cell).collect::<Vec<_>>());
    apply_table_style(&mut table);
    table
}

fn value_cell(value: Option<&Value>) -> Cell {
    match value {
        None | Some(Value::Null) => Cell::new("-").fg(Color::DarkGrey),
        Some(Value::Bool(true)) => Cell::new("Yes").fg(Color::Green),
        Some(Value::Bool(false)) => Cell::new("No").fg(Color::Red),
        Some(Value::Number(number)) => {
            Cell::new(format_number(*number)).set_alignment(CellAlignment::Right)
        }
        Some(Value::Text(text)) => Cell::new(text),
    }
}

/// Page of records as a table, the active sort column marked with an arrow.
pub fn list_table(view: &DerivedView<'_>, screen: &ScreenConfig, criteria: &Criteria) -> Table {
    let headers: Vec<String> = screen
        .columns
        .iter()
        .map(|column| match criteria.sort() {
            Some(sort) if sort.field == column.field => {
                let arrow = match sort.direction {
                    SortDirection::Asc => '▲',
                    SortDirection::Desc => '▼',
                };
                format!("{} {arrow}", column.label)
            }
            _ => column.label.clone(),
        })
        .collect();
    let labels: Vec<&str> = headers.iter().map(String::as_str).collect();
    let mut table = styled_table(&labels);
    for record in view.items() {
        table.add_row(
            screen
                .columns
                .iter()
                .map(|column| value_cell(record.get(&column.field)))
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// One-line pagination caption shown under a list.
pub fn page_caption(page: &PageInfo) -> String {
    if page.total_items == 0 {
        return "No matching records".to_string();
    }
    if page.is_out_of_range() {
        return format!(
            "Page {} is out of range ({} pages, {} matching records)",
            page.page, page.total_pages, page.total_items
        );
    }
    format!(
        "Page {} of {} (records {}-{} of {})",
        page.page, page.total_pages, page.first_row, page.last_row, page.total_items
    )
}

/// Machine-readable form of a list page.
pub fn list_json(
    view: &DerivedView<'_>,
    screen: &ScreenConfig,
    criteria: &Criteria,
) -> serde_json::Value {
    let items: Vec<serde_json::Value> = view.items().iter().copied().map(Record::to_json).collect();
    let filters: serde_json::Map<String, serde_json::Value> = criteria
        .filters()
        .iter()
        .filter_map(|(field, selection)| match selection {
            FilterSelection::All => None,
            FilterSelection::Only(value) => Some((field.clone(), value.to_json())),
        })
        .collect();
    json!({
        "screen": screen.name(),
        "search": criteria.search(),
        "filters": filters,
        "sort": criteria.sort(),
        "page": view.page(),
        "items": items,
    })
}

fn freshness_caption(freshness: &Freshness) -> String {
    match freshness {
        Freshness::Unavailable => "unavailable".to_string(),
        Freshness::Fresh { at } => format!("as of {}", at.format("%Y-%m-%d %H:%M UTC")),
        Freshness::Stale { since, reason } => format!(
            "stale since {} ({reason})",
            since.format("%Y-%m-%d %H:%M UTC")
        ),
    }
}

fn panel_table<T>(board: &StatsBoard<T>, rows: impl FnOnce(&T) -> Vec<(String, String)>) -> Table {
    let title = format!("{} ({})", board.name(), freshness_caption(board.freshness()));
    let mut table = styled_table(&[title.as_str(), ""]);
    match board.snapshot() {
        Some(snapshot) => {
            for (label, value) in rows(snapshot) {
                table.add_row(vec![
                    Cell::new(label),
                    Cell::new(value).set_alignment(CellAlignment::Right),
                ]);
            }
        }
        None => {
            table.add_row(vec![Cell::new("No data").fg(Color::DarkGrey), Cell::new("")]);
        }
    }
    table
}

fn row(label: &str, value: impl ToString) -> (String, String) {
    (label.to_string(), value.to_string())
}

fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

pub fn book_panel(board: &StatsBoard<BookStats>) -> Table {
    panel_table(board, |stats| {
        vec![
            row("Total books", stats.total),
            row("Available", stats.available),
            row("Unavailable", stats.unavailable),
            row("Availability", format!("{}%", stats.availability_percent)),
        ]
    })
}

pub fn circulation_panel(board: &StatsBoard<CirculationStats>) -> Table {
    panel_table(board, |stats| {
        vec![
            row("Borrowed", stats.borrowed_books),
            row("Reserved", stats.reserved_books),
            row("Overdue", stats.overdue_books),
            row("Reservations", stats.total_reservations),
            row("Active reservations", stats.active_reservations),
            row("Fines paid", money(stats.paid_fines)),
            row("Fines pending", money(stats.pending_fines)),
            row("Fines total", money(stats.total_fines)),
        ]
    })
}

pub fn member_panel(board: &StatsBoard<MemberStats>) -> Table {
    panel_table(board, |stats| {
        let mut rows = vec![
            row("Total members", stats.total),
            row("Active", stats.active),
            row("Suspended", stats.suspended),
            row("With fines", stats.with_fines),
        ];
        rows.extend(
            stats
                .by_type
                .iter()
                .map(|(kind, count)| row(&format!("Type {kind}"), count)),
        );
        rows
    })
}

pub fn membership_types_table() -> Table {
    let mut table = styled_table(&["Type", "Name", "Duration", "Book limit", "Daily fine"]);
    for kind in MembershipType::ALL {
        let years = kind.duration_years();
        table.add_row(vec![
            Cell::new(kind.as_str()),
            Cell::new(kind.display_name()),
            Cell::new(format!("{years} year{}", if years == 1 { "" } else { "s" })),
            Cell::new(kind.borrowing_limit()).set_alignment(CellAlignment::Right),
            Cell::new(money(kind.daily_fine_rate())).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn screens_table(screens: &[ScreenConfig]) -> Table {
    let mut table = styled_table(&["Screen", "Search", "Filters", "Sort", "Default", "Page size"]);
    for screen in screens {
        let filters = screen
            .filters
            .iter()
            .map(|filter| {
                if filter.choices.is_empty() {
                    filter.name.clone()
                } else {
                    let keys: Vec<&str> = filter.choices.iter().map(|c| c.key.as_str()).collect();
                    format!("{} [{}]", filter.name, keys.join("|"))
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        let sorts = screen
            .sort_fields
            .iter()
            .map(|field| format!("{} ({})", field.name, field.kind.as_str()))
            .collect::<Vec<_>>()
            .join("\n");
        let default = screen
            .default_sort
            .as_ref()
            .map(|key| format!("{} {}", key.field, key.direction))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(screen.name()),
            Cell::new(screen.search_fields.join("\n")),
            Cell::new(filters),
            Cell::new(sorts),
            Cell::new(default),
            Cell::new(screen.page_size).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Plain-text session summary.
pub fn session_summary(session: &Session, path: &Path) -> String {
    let mut lines = vec![format!("Session file: {}", path.display())];
    match &session.user {
        Some(user) => {
            let name = user
                .text("username")
                .or_else(|| user.text("email"))
                .unwrap_or("(unnamed)");
            lines.push(format!("Signed in as: {name}"));
            if let Some(at) = session.signed_in_at {
                lines.push(format!("Signed in at: {}", at.to_rfc3339()));
            }
        }
        None => lines.push("Signed in as: nobody".to_string()),
    }
    match &session.member {
        Some(member) => {
            let id = member.text("memberId").unwrap_or("(no member id)");
            let kind = member.text("membershipType").unwrap_or("-");
            lines.push(format!("Member: {id} ({kind})"));
        }
        None => lines.push("Member: not linked".to_string()),
    }
    lines.join("\n")
}
