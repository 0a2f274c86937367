//! CLI argument definitions for `libris`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use libris_cli::list::ListOptions;
use libris_model::EntityKind;

#[derive(Parser)]
#[command(
    name = "libris",
    version,
    about = "Browse library collections exported from the library backend",
    long_about = "Browse library collections exported from the library backend.\n\n\
                  Lists books, members, borrowings and reservations with search,\n\
                  filters, sorting and paging, and summarises them as dashboard\n\
                  statistics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Configuration file (default: libris.toml in the platform config dir).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List one page of a collection.
    List(ListArgs),

    /// Show dashboard statistics.
    Stats(StatsArgs),

    /// Inspect or change the signed-in session.
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// List the membership types and their limits.
    MembershipTypes,

    /// Show what each list screen can search, filter and sort by.
    Screens,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Which list screen to use.
    #[arg(value_enum)]
    pub screen: ScreenArg,

    /// JSON collection file, or `-` for stdin.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Case-insensitive substring to look for in the screen's search fields.
    #[arg(long = "search", short = 's', value_name = "QUERY")]
    pub search: Option<String>,

    /// Category filter; `FIELD=all` clears it. May be repeated.
    #[arg(long = "filter", short = 'f', value_name = "FIELD=VALUE")]
    pub filters: Vec<String>,

    /// Sort by this field instead of the screen default.
    #[arg(long = "sort", value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort descending.
    #[arg(long = "desc")]
    pub desc: bool,

    /// 1-based page number.
    #[arg(long = "page", short = 'p', default_value_t = 1)]
    pub page: usize,

    /// Rows per page (overrides the configured size).
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// Print the page as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

impl ListArgs {
    pub fn options(&self) -> ListOptions {
        ListOptions {
            search: self.search.clone(),
            filters: self.filters.clone(),
            sort: self.sort.clone(),
            desc: self.desc,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Book collection file.
    #[arg(long = "books", value_name = "PATH")]
    pub books: Option<PathBuf>,

    /// Borrowing collection file.
    #[arg(long = "borrowings", value_name = "PATH")]
    pub borrowings: Option<PathBuf>,

    /// Reservation collection file.
    #[arg(long = "reservations", value_name = "PATH")]
    pub reservations: Option<PathBuf>,

    /// Member collection file.
    #[arg(long = "members", value_name = "PATH")]
    pub members: Option<PathBuf>,

    /// Reference date for overdue checks (default: today).
    #[arg(long = "today", value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Print the panels as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// Show who is signed in.
    Show,

    /// Sign in with a user record as returned by the login endpoint.
    SignIn {
        #[arg(value_name = "USER_JSON")]
        user: String,
    },

    /// Link the signed-in user to a member record.
    AttachMember {
        #[arg(value_name = "MEMBER_JSON")]
        member: String,
    },

    /// Sign out, clearing user and member.
    SignOut,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ScreenArg {
    Books,
    Members,
    Borrowings,
    Reservations,
}

impl From<ScreenArg> for EntityKind {
    fn from(arg: ScreenArg) -> Self {
        match arg {
            ScreenArg::Books => EntityKind::Book,
            ScreenArg::Members => EntityKind::Member,
            ScreenArg::Borrowings => EntityKind::Borrowing,
            ScreenArg::Reservations => EntityKind::Reservation,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
