use clap::Parser;
use fieldate_core::error::CoreError;
use owo_colors::{OwoColorize, Style};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

/// Log filter level for a `-v` count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() {
    let cli = cli::Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(cli.verbose)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match config::Config::new() {
        Ok(config) => config,
        Err(e) => {
            handle_error(anyhow::Error::new(e).context("Invalid configuration"));
            std::process::exit(1);
        }
    };
    debug!(?config, "Loaded configuration");

    let clock = match util::resolve_clock(&config, cli.timezone.as_deref(), cli.today.as_deref()) {
        Ok(clock) => clock,
        Err(e) => {
            handle_error(e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        cli::Commands::Format(command) => commands::format::format_dates(command, &clock),
        cli::Commands::Due(command) => commands::due::due_dates(command, &clock, &config),
        cli::Commands::Classify(command) => commands::classify::classify_date(command, &clock),
        cli::Commands::Relative(command) => commands::relative::relative_dates(command, &clock),
        cli::Commands::Info(command) => commands::info::show_info(command, &clock, &config),
        cli::Commands::Updated(command) => commands::updated::show_last_updated(command, &clock),
        cli::Commands::Timezones(command) => commands::timezones::list_timezones(command),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::InvalidTimezone(s)) => {
            eprintln!("{} {}", "Error:".style(error_style), s.yellow());
        }
        Some(CoreError::InvalidDate(s)) => {
            eprintln!("{} {}", "Error:".style(error_style), s);
            eprintln!("Dates may be written as DD/MM/YYYY, YYYY-MM-DD or in words, e.g. 'next monday'.");
        }
        None => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
