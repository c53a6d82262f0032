//! pantonecheck library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, dir: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(dir, cli.server.clone()),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, dir),
        Commands::Login { user, password } => {
            cli::commands::login::handle(user, password.as_deref(), cfg, dir)
        }
        Commands::Logout => cli::commands::logout::handle(dir),
        Commands::Status => cli::commands::status::handle(dir),
        Commands::List { json } => cli::commands::list::handle(*json, cfg, dir),
        Commands::Request {
            pantone,
            points,
            alt_hex,
        } => cli::commands::request::handle(pantone, points, alt_hex.as_deref(), cfg, dir),
        Commands::Export {
            format,
            file,
            force,
        } => cli::commands::export::handle(format, file, *force, cfg, dir),
        Commands::Users { action } => cli::commands::users::handle(action, cfg, dir),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // diagnostic channel: RUST_LOG-controlled, stderr only
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // resolve config dir once; --config-dir wins (tests, multiple profiles)
    let dir = cli
        .config_dir
        .as_ref()
        .map(std::path::PathBuf::from)
        .unwrap_or_else(Config::default_dir);

    let mut cfg = Config::load(&dir)?;

    // command-line server override
    if let Some(server) = &cli.server {
        cfg.server = server.clone();
    }

    dispatch(&cli, &cfg, &dir)
}
