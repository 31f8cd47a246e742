//! Command dispatch and settings resolution.

pub mod ask;
pub mod config;
pub mod tui;

use std::time::Duration;

use anyhow::{Context, Result};
use qabot_client::ClientConfig;
use qabot_constant::defaults::ENV_THEME;
use qabot_tui::Appearance;

use crate::cli::{Cli, Command};
use crate::output;

/// Effective settings: env (already loaded from env files) with CLI flags on top.
#[derive(Debug, Clone)]
pub struct Settings {
    pub client: ClientConfig,
    pub appearance: Appearance,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut client = ClientConfig::from_env().context("invalid QABOT_* environment")?;
        if let Some(server) = &cli.server {
            client = client.with_base_url(server.clone());
        }
        if let Some(secs) = cli.timeout {
            client = client.with_timeout(Some(Duration::from_secs(secs)));
        }

        let appearance = match cli.theme {
            Some(theme) => theme.into(),
            None => theme_from_env(),
        };

        Ok(Self {
            client,
            appearance,
            verbose: cli.verbose,
        })
    }
}

fn theme_from_env() -> Appearance {
    match std::env::var(ENV_THEME) {
        Ok(raw) if !raw.trim().is_empty() => raw.parse().unwrap_or_else(|e: String| {
            output::warning(&format!("{}: {}; using dark", ENV_THEME, e));
            Appearance::Dark
        }),
        _ => Appearance::default(),
    }
}

pub async fn handle(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(&cli)?;
    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => tui::handle(settings).await,
        Command::Ask { question } => ask::handle(settings, question.join(" ")).await,
        Command::Config { action } => config::handle(settings, action),
    }
}
