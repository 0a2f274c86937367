//! Circulation figures: loans, reservations, overdue items and fines.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use libris_model::{BorrowingStatus, Record, ReservationStatus};
use libris_view::parse_date;

/// Loan and fine figures derived from books, borrowings and reservations.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CirculationStats {
    pub total_books: usize,
    pub available_books: usize,
    pub borrowed_books: usize,
    pub reserved_books: usize,
    pub total_reservations: usize,
    pub active_reservations: usize,
    pub overdue_books: usize,
    pub total_fines: f64,
    pub paid_fines: f64,
    pub pending_fines: f64,
}

/// Collections the circulation figures are computed from.
#[derive(Debug, Clone, Copy, Default)]
pub struct CirculationInput<'a> {
    pub books: &'a [Record],
    pub borrowings: &'a [Record],
    pub reservations: &'a [Record],
}

impl CirculationStats {
    /// Compute the figures as of `today`.
    ///
    /// A loan is overdue when it is not returned and its due date falls
    /// before `today`; loans without a readable due date are never overdue.
    pub fn compute(input: CirculationInput<'_>, today: NaiveDate) -> Self {
        let total_books = input.books.len();
        let available_books = input
            .books
            .iter()
            .filter(|book| book.flag("availability") == Some(true))
            .count();

        let active_loans = input
            .borrowings
            .iter()
            .filter(|loan| has_status(loan, BorrowingStatus::Active.as_str()))
            .count();
        let borrowed_books = if active_loans > 0 {
            active_loans
        } else {
            total_books.saturating_sub(available_books)
        };

        let active_reservations = input
            .reservations
            .iter()
            .filter(|reservation| has_status(reservation, ReservationStatus::Pending.as_str()))
            .count();

        let mut overdue_books = 0;
        let mut paid = 0.0;
        let mut pending = 0.0;
        for loan in input.borrowings {
            let fee = loan.number("lateFee").unwrap_or(0.0);
            if has_status(loan, BorrowingStatus::Returned.as_str()) {
                paid += fee;
                continue;
            }
            pending += fee;
            if is_due_before(loan, today) {
                overdue_books += 1;
            }
        }

        let stats = Self {
            total_books,
            available_books,
            borrowed_books,
            reserved_books: active_reservations,
            total_reservations: input.reservations.len(),
            active_reservations,
            overdue_books,
            total_fines: round_cents(paid + pending),
            paid_fines: round_cents(paid),
            pending_fines: round_cents(pending),
        };
        debug!(
            borrowed = stats.borrowed_books,
            overdue = stats.overdue_books,
            active_reservations = stats.active_reservations,
            "computed circulation stats"
        );
        stats
    }
}

fn has_status(record: &Record, status: &str) -> bool {
    record.text("status") == Some(status)
}

fn is_due_before(loan: &Record, today: NaiveDate) -> bool {
    loan.text("dueDate")
        .and_then(parse_date)
        .is_some_and(|due| due.date() < today)
}

/// Round a currency amount to two decimals.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    fn loan(status: &str, due: &str, fee: f64) -> Record {
        Record::new()
            .with("status", status)
            .with("dueDate", due)
            .with("lateFee", fee)
    }

    #[test]
    fn overdue_excludes_returned_and_future_loans() {
        let borrowings = vec![
            loan("ACTIVE", "2024-03-01", 0.0),
            loan("ACTIVE", "2024-03-10", 0.0),
            loan("RETURNED", "2024-02-01", 0.0),
            loan("ACTIVE", "2024-03-05", 0.0),
            Record::new().with("status", "ACTIVE").with("dueDate", "soon"),
        ];
        let input = CirculationInput {
            borrowings: &borrowings,
            ..CirculationInput::default()
        };
        let stats = CirculationStats::compute(input, day("2024-03-05"));
        assert_eq!(stats.overdue_books, 1);
        assert_eq!(stats.borrowed_books, 4);
    }

    #[test]
    fn fines_split_on_returned_status() {
        let borrowings = vec![
            loan("RETURNED", "2024-01-01", 1.25),
            loan("RETURNED", "2024-01-01", 2.0),
            loan("ACTIVE", "2024-01-01", 0.5),
            Record::new().with("status", "ACTIVE").with("lateFee", "n/a"),
        ];
        let input = CirculationInput {
            borrowings: &borrowings,
            ..CirculationInput::default()
        };
        let stats = CirculationStats::compute(input, day("2024-01-01"));
        assert_eq!(stats.paid_fines, 3.25);
        assert_eq!(stats.pending_fines, 0.5);
        assert_eq!(stats.total_fines, 3.75);
        assert_eq!(round_cents(0.1 + 0.2), 0.3);
    }

    #[test]
    fn borrowed_falls_back_to_unavailable_books() {
        let books = vec![
            Record::new().with("availability", true),
            Record::new().with("availability", false),
            Record::new().with("availability", false),
        ];
        let input = CirculationInput {
            books: &books,
            ..CirculationInput::default()
        };
        let stats = CirculationStats::compute(input, day("2024-01-01"));
        assert_eq!(stats.borrowed_books, 2);
        assert_eq!(stats.available_books, 1);
    }
}
