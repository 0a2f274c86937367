//! `libris` command-line client.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use libris_cli::config::LibrisConfig;
use libris_cli::logging::{LogConfig, LogFormat, init_logging};
use libris_session::SessionError;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_list, run_membership_types, run_screens, run_session, run_stats};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config = match LibrisConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(2);
        }
    };
    let outcome = match &cli.command {
        Command::List(args) => run_list(args, &config).map(|()| 0),
        Command::Stats(args) => run_stats(args).map(|failures| i32::from(failures > 0)),
        Command::Session { action } => run_session(action, &config).map(|()| 0),
        Command::MembershipTypes => {
            run_membership_types();
            Ok(0)
        }
        Command::Screens => run_screens(&config).map(|()| 0),
    };
    let exit_code = match outcome {
        Ok(code) => code,
        Err(error) => {
            report(&error);
            1
        }
    };
    std::process::exit(exit_code);
}

fn report(error: &anyhow::Error) {
    if let Some(session_error) = error.downcast_ref::<SessionError>() {
        eprintln!("error: {}", session_error.user_message());
        if let Some(hint) = session_error.suggestion() {
            eprintln!("hint: {hint}");
        }
    } else {
        eprintln!("error: {error:#}");
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
