//! opstrack library root.
//! Exposes the CLI parser, a high-level run() function, and the engine
//! modules: pure core, models, and the SQLite persistence adapter.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Report { command } => cli::commands::report::handle(command, cli, cfg),
        Commands::Task { command } => cli::commands::task::handle(command, cli, cfg),
        Commands::Kpi { command } => cli::commands::kpi::handle(command, cli, cfg),
        Commands::Leads => cli::commands::leads::handle(cfg),
        Commands::Dcr { date } => cli::commands::dcr::handle(date, cli, cfg),
        Commands::Export { format, file, period } => {
            cli::commands::export::handle(format, file, period.as_deref(), cli, cfg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; apply the optional DB override from the CLI.
    let mut cfg = Config::load();

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
