use std::path::Path;

use anyhow::Result;
use chrono::{Local, Utc};
use serde_json::json;
use tracing::{info_span, warn};

use libris_model::{EntityKind, RawCollection, Record};
use libris_session::{FileSessionStore, SessionContext};
use libris_stats::{BookStats, CirculationInput, CirculationStats, MemberStats, StatsBoard};
use libris_view::ScreenConfig;

use libris_cli::config::LibrisConfig;
use libris_cli::input::{load_collection, parse_record};
use libris_cli::list::build_view;
use libris_cli::render::{
    book_panel, circulation_panel, list_json, list_table, member_panel, membership_types_table,
    page_caption, screens_table, session_summary,
};

use crate::cli::{ListArgs, SessionAction, StatsArgs};

pub fn run_list(args: &ListArgs, config: &LibrisConfig) -> Result<()> {
    let entity = EntityKind::from(args.screen);
    let _span = info_span!("list", screen = %entity).entered();

    let screen = config.screen(entity)?;
    let raw = load_collection(&args.input)?;
    let view = build_view(screen, raw, &args.options())?;

    let derived = view.view();
    if args.json {
        let output = list_json(&derived, view.config(), view.criteria());
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", list_table(&derived, view.config(), view.criteria()));
        println!("{}", page_caption(&derived.page()));
    }
    Ok(())
}

type Loaded = Option<std::result::Result<RawCollection, String>>;

fn load_optional(path: Option<&Path>) -> Loaded {
    path.map(|path| load_collection(path).map_err(|error| format!("{error:#}")))
}

fn records(
    source: Option<&std::result::Result<RawCollection, String>>,
) -> std::result::Result<&[Record], String> {
    match source {
        None => Ok(&[]),
        Some(Ok(collection)) => Ok(collection.records()),
        Some(Err(reason)) => Err(reason.clone()),
    }
}

/// Print the dashboard. Returns how many panels could not be refreshed.
pub fn run_stats(args: &StatsArgs) -> Result<usize> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let now = Utc::now();
    let _span = info_span!("stats", %today).entered();

    let books = load_optional(args.books.as_deref());
    let borrowings = load_optional(args.borrowings.as_deref());
    let reservations = load_optional(args.reservations.as_deref());
    let members = load_optional(args.members.as_deref());

    let mut failures = 0;
    let mut book_board = StatsBoard::new("Books");
    let mut circulation_board = StatsBoard::new("Circulation");
    let mut member_board = StatsBoard::new("Members");

    if books.is_some() {
        let outcome = records(books.as_ref()).map(BookStats::compute);
        failures += usize::from(outcome.is_err());
        book_board.apply(outcome, now);
    }

    // Circulation needs every collection that was given to load.
    if books.is_some() || borrowings.is_some() || reservations.is_some() {
        let outcome = records(books.as_ref()).and_then(|books| {
            Ok(CirculationInput {
                books,
                borrowings: records(borrowings.as_ref())?,
                reservations: records(reservations.as_ref())?,
            })
        });
        let outcome = outcome.map(|input| CirculationStats::compute(input, today));
        failures += usize::from(outcome.is_err());
        circulation_board.apply(outcome, now);
    }

    if members.is_some() {
        let outcome = records(members.as_ref()).map(MemberStats::compute);
        failures += usize::from(outcome.is_err());
        member_board.apply(outcome, now);
    }

    if args.json {
        let output = json!({
            "today": today,
            "books": book_board,
            "circulation": circulation_board,
            "members": member_board,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", book_panel(&book_board));
        println!("{}", circulation_panel(&circulation_board));
        println!("{}", member_panel(&member_board));
    }
    Ok(failures)
}

pub fn run_session(action: &SessionAction, config: &LibrisConfig) -> Result<()> {
    let path = config.session_path()?;
    let mut context = SessionContext::load(FileSessionStore::new(&path))?;
    match action {
        SessionAction::Show => {}
        SessionAction::SignIn { user } => {
            context.sign_in(parse_record(user)?)?;
        }
        SessionAction::AttachMember { member } => {
            context.attach_member(parse_record(member)?)?;
        }
        SessionAction::SignOut => {
            if context.current().is_empty() {
                warn!("no session to sign out of");
            }
            context.sign_out()?;
        }
    }
    println!("{}", session_summary(context.current(), &path));
    Ok(())
}

pub fn run_membership_types() {
    println!("{}", membership_types_table());
}

pub fn run_screens(config: &LibrisConfig) -> Result<()> {
    let screens = EntityKind::ALL
        .into_iter()
        .map(|entity| config.screen(entity))
        .collect::<Result<Vec<ScreenConfig>>>()?;
    println!("{}", screens_table(&screens));
    Ok(())
}
