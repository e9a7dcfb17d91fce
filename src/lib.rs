//! hometools library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod storage;
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
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Cycle { .. } => cli::commands::cycle::handle(&cli.command, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, cfg),
        Commands::Schedule { .. } => cli::commands::schedule::handle(&cli.command, cfg),
        Commands::Todo { .. } => cli::commands::todo::handle(&cli.command, cfg),
        Commands::Inr { .. } => cli::commands::inr::handle(&cli.command, cfg),
        Commands::Airline { .. } => cli::commands::airline::handle(&cli.command, cfg),
        Commands::City { .. } => cli::commands::city::handle(&cli.command, cfg),
        Commands::Tools { .. } => cli::commands::tools::handle(&cli.command, cfg),
        Commands::Weather { .. } => cli::commands::weather::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load the config once
    let mut cfg = Config::load()?;

    // command-line overrides
    if let Some(dir) = &cli.data_dir {
        cfg.relocate_data(dir, cli.db.is_some());
    }
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
