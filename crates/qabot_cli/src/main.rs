//! CLI entry point for qabot.

mod cli;
mod commands;
mod output;

use std::path::Path;

use clap::Parser;
use qabot_constant::app::{DATA_DIR, ENV_FILE};

use crate::cli::Cli;

/// Load env files before parsing so `QABOT_*` values act as defaults.
/// Order: 1) ~/.qabot/env  2) nearest .env walking up from the current directory.
/// dotenvy never overrides variables that are already set, so the shell wins.
fn load_qabot_env() {
    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(DATA_DIR).join(ENV_FILE);
        if config_path.exists() {
            let _ = dotenvy::from_path(&config_path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir: &Path = &cwd;
        for _ in 0..32 {
            let env_file = dir.join(".env");
            if env_file.exists() {
                let _ = dotenvy::from_path(&env_file);
                break;
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
    }
}

#[tokio::main]
async fn main() {
    load_qabot_env();
    let cli = Cli::parse();
    output::init(cli.output);
    let verbose = cli.verbose;

    if let Err(e) = commands::handle(cli).await {
        if verbose {
            output::error(&format!("{:#}", e));
        } else {
            output::error(&e.to_string());
        }
        std::process::exit(1);
    }
}
