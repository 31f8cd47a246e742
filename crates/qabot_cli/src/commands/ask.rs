//! `qabot ask`: one question, one answer, printed like the chat renders it.

use anyhow::{Context, Result, bail};
use qabot_client::{AskClient, HttpAskClient};
use qabot_constant::defaults::FALLBACK_REPLY;
use qabot_core::{AskRequest, Message, system_clock};
use qabot_observability::{ObservabilityConfig, init};
use tracing::debug;

use super::Settings;
use crate::output;

pub async fn handle(settings: Settings, question: String) -> Result<()> {
    if question.trim().is_empty() {
        bail!("question is empty");
    }

    let level = if settings.verbose { "info,qabot.trace=debug" } else { "warn" };
    let mut obs_config = ObservabilityConfig::from_env().with_console(true);
    if obs_config.log_level.is_none() {
        obs_config = obs_config.with_log_level(level);
    }
    // A second subscriber is only possible in tests; nothing to report.
    let _ = init(obs_config);

    let client = HttpAskClient::new(settings.client)?;
    let clock = system_clock();

    let spinner = output::spinner(&format!("Asking {}", client.url()));
    let outcome = client.ask(AskRequest::new(question)).await;
    spinner.finish_and_clear();

    let reply = outcome.context(FALLBACK_REPLY)?;
    debug!(target: "qabot.trace", source = ?reply.source, "answer received");

    let message = Message::bot(reply.answer, reply.source, clock());
    print_message(&message);
    Ok(())
}

fn print_message(message: &Message) {
    if output::is_json() {
        output::data("answer", message);
        return;
    }
    output::dim(&message.time_label());
    for paragraph in message.paragraphs() {
        println!("{}", paragraph);
    }
    if let Some(source) = message.source_line() {
        output::dim(&source);
    }
}
