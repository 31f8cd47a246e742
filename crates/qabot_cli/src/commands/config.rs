//! `qabot config` subcommands.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use qabot_client::{ClientConfig, HttpAskClient};
use qabot_constant::app::{DATA_DIR, ENV_FILE};
use qabot_constant::defaults::ENV_SERVER_URL;
use qabot_observability::ObservabilityConfig;

use super::Settings;
use crate::cli::ConfigAction;
use crate::output;

pub fn handle(settings: Settings, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show(&settings),
        ConfigAction::SetServer { url } => set_server(&url),
    }
}

fn show(settings: &Settings) -> Result<()> {
    let timeout = settings
        .client
        .timeout
        .map(|t| format!("{}s", t.as_secs()))
        .unwrap_or_else(|| "none".to_string());
    let log = ObservabilityConfig::from_env().resolved_filter();
    let env_file = config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "-".to_string());

    let rows = [
        ("server", settings.client.base_url.clone()),
        ("endpoint", settings.client.ask_url()),
        ("timeout", timeout),
        ("theme", settings.appearance.to_string()),
        ("log", log),
        ("env file", env_file),
    ];

    output::header("qabot configuration");
    let mut table = output::table();
    output::table_header(&mut table, "Setting", "Value");
    for (name, value) in &rows {
        output::table_row(&mut table, name, value);
    }
    let items: Vec<(&str, &str)> = rows.iter().map(|(k, v)| (*k, v.as_str())).collect();
    output::table_print(&table, &items);
    Ok(())
}

fn set_server(url: &str) -> Result<()> {
    // Reject URLs the client could not use.
    HttpAskClient::new(ClientConfig::default().with_base_url(url))?;

    let path = config_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    save_env_var(&path, ENV_SERVER_URL, url)?;
    output::success(&format!("Saved {} to {}", ENV_SERVER_URL, path.display()));
    Ok(())
}

fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(DATA_DIR).join(ENV_FILE))
}

/// Upsert `export KEY="value"` in an env file, keeping other exports.
fn save_env_var(path: &Path, key: &str, value: &str) -> Result<()> {
    let existing = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut vars: BTreeMap<String, String> = existing
        .lines()
        .filter_map(|line| {
            let line = line.trim().strip_prefix("export ")?;
            let (k, v) = line.split_once('=')?;
            Some((k.trim().to_string(), v.trim().to_string()))
        })
        .collect();
    vars.insert(key.to_string(), format!("\"{}\"", value));

    let mut content = String::new();
    content.push_str("# qabot configuration\n");
    content.push_str("# Loaded automatically by qabot; can also be sourced by a shell.\n\n");
    for (k, v) in &vars {
        content.push_str(&format!("export {}={}\n", k, v));
    }
    fs::write(path, content)?;
    Ok(())
}
