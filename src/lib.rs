//! abxlog library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! spreadsheet access layer.

pub mod cli;
pub mod config;
pub mod core;
pub mod credentials;
pub mod errors;
pub mod export;
pub mod models;
pub mod sheets;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::context::AppContext;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(ctx),
        Commands::Status => cli::commands::status::handle(ctx),
        Commands::TestConnection => cli::commands::test_connection::handle(ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, ctx),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
    }
}

/// Build the application context: config file, then command-line overrides.
pub fn build_context(cli: &Cli) -> AppResult<AppContext> {
    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);

    let mut cfg = Config::load_from(&config_path)?;

    if let Some(secrets) = &cli.secrets {
        cfg.secrets = secrets.clone();
    }
    if let Some(worksheet) = &cli.worksheet {
        cfg.worksheet = worksheet.clone();
    }

    Ok(AppContext::new(cfg, config_path))
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let ctx = build_context(&cli)?;
    dispatch(&cli, &ctx)
}
