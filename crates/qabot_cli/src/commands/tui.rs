//! `qabot tui`: interactive chat.

use std::sync::Arc;

use anyhow::Result;
use qabot_client::HttpAskClient;
use qabot_observability::{LogSink, ObservabilityConfig, init, shutdown};
use qabot_tui::{ChatController, ChatState, run_chat};
use tokio::sync::mpsc;
use tracing::info;

use super::Settings;
use crate::output;

pub async fn handle(settings: Settings) -> Result<()> {
    // Log lines go to the logs screen (Ctrl+D); the terminal belongs to the TUI.
    let (log_tx, log_rx) = mpsc::channel::<String>(512);
    let log_sink: LogSink = Arc::new(move |line| {
        let _ = log_tx.try_send(line);
    });

    let mut obs_config = ObservabilityConfig::from_env()
        .with_version(qabot_constant::app::VERSION)
        .with_console(false)
        .with_log_sink(log_sink);
    if obs_config.log_level.is_none() && settings.verbose {
        obs_config = obs_config.with_log_level("info,qabot.trace=debug");
    }
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Observability init failed (continuing): {}", e));
    }

    let client = HttpAskClient::new(settings.client)?;
    info!(server = %client.url(), "starting chat");

    let mut controller = ChatController::new(Arc::new(client));
    let state = ChatState::with_appearance(settings.appearance);
    let result = tokio::task::block_in_place(|| run_chat(&mut controller, state, Some(log_rx)));

    shutdown();
    result
}
