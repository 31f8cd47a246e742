//! Interaction controller: turns a send action into a rendered question, one
//! `/ask` request, and exactly one rendered answer.
//!
//! The controller owns the [AskClient] and the runtime handle it spawns
//! requests on; [ChatState] is passed in by the caller on every operation.
//! Each request runs as its own tokio task and reports back over an unbounded
//! channel, so the UI thread never blocks on the network.

use std::collections::HashMap;
use std::sync::Arc;

use qabot_client::{AskClient, AskError};
use qabot_core::{AskReply, AskRequest, ReplyTag, RequestId, RequestIds};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::state::ChatState;

/// Outcome of one request, delivered when its task finishes.
#[derive(Debug)]
pub struct Reply {
    pub id: RequestId,
    pub outcome: Result<AskReply, AskError>,
}

/// Sends exactly one [Reply] for its request: the real outcome via [send](Self::send),
/// or [AskError::Interrupted] when dropped first (the task panicked or was aborted).
struct ReplyGuard {
    id: RequestId,
    tx: Option<mpsc::UnboundedSender<Reply>>,
}

impl ReplyGuard {
    fn send(mut self, outcome: Result<AskReply, AskError>) {
        if let Some(tx) = self.tx.take() {
            // Receiver is gone only when the controller was dropped.
            let _ = tx.send(Reply { id: self.id, outcome });
        }
    }
}

impl Drop for ReplyGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(Reply {
                id: self.id,
                outcome: Err(AskError::Interrupted),
            });
        }
    }
}

struct InFlight {
    question: String,
    task: JoinHandle<()>,
}

pub struct ChatController {
    client: Arc<dyn AskClient>,
    runtime: Handle,
    ids: RequestIds,
    in_flight: HashMap<RequestId, InFlight>,
    reply_tx: mpsc::UnboundedSender<Reply>,
    reply_rx: mpsc::UnboundedReceiver<Reply>,
}

impl ChatController {
    /// Controller spawning on the current tokio runtime. Panics outside a runtime,
    /// like [Handle::current]; use [with_runtime](Self::with_runtime) otherwise.
    pub fn new(client: Arc<dyn AskClient>) -> Self {
        Self::with_runtime(client, Handle::current())
    }

    pub fn with_runtime(client: Arc<dyn AskClient>, runtime: Handle) -> Self {
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        Self {
            client,
            runtime,
            ids: RequestIds::new(),
            in_flight: HashMap::new(),
            reply_tx,
            reply_rx,
        }
    }

    /// Send the current input. Whitespace-only input is ignored and left as is.
    ///
    /// Otherwise the question is rendered, the input cleared, and one request
    /// spawned. Returns the id of that request.
    pub fn on_send(&mut self, state: &mut ChatState) -> Option<RequestId> {
        if state.input_buffer.trim().is_empty() {
            return None;
        }
        let text = state.input_buffer.clone();
        state.render_user_message(text.clone());
        state.input_clear_line();

        let id = self.ids.allocate();
        debug!(target: "qabot.trace", request = %id, chars = text.len(), "sending question");

        let client = Arc::clone(&self.client);
        let guard = ReplyGuard {
            id,
            tx: Some(self.reply_tx.clone()),
        };
        let request = AskRequest::new(text.clone());
        let task = self.runtime.spawn(async move {
            let outcome = client.ask(request).await;
            guard.send(outcome);
        });

        self.in_flight.insert(id, InFlight { question: text, task });
        state.set_pending(self.in_flight.len());
        Some(id)
    }

    /// Render exactly one bot message for `reply`. Returns false, rendering
    /// nothing, when the request is no longer in flight (it was cancelled).
    ///
    /// A reply to anything but the newest question carries a [ReplyTag]. Any
    /// failure is shown as the fixed fallback text with no source.
    pub fn apply_reply(&mut self, state: &mut ChatState, reply: Reply) -> bool {
        let Some(flight) = self.in_flight.remove(&reply.id) else {
            debug!(target: "qabot.trace", request = %reply.id, "dropping reply for cancelled request");
            return false;
        };
        let stale = self.ids.latest().is_some_and(|latest| reply.id < latest);
        let tag = stale.then(|| ReplyTag::new(reply.id, flight.question));

        match reply.outcome {
            Ok(AskReply { answer, source }) => {
                debug!(target: "qabot.trace", request = %reply.id, stale, "answer received");
                state.render_bot_reply(answer, source, tag);
            }
            Err(e) => {
                warn!(request = %reply.id, timeout = e.is_timeout(), error = %e, "ask failed");
                state.render_bot_failure(tag);
            }
        }
        state.set_pending(self.in_flight.len());
        true
    }

    /// Apply every reply that has already arrived. Never blocks.
    pub fn poll_replies(&mut self, state: &mut ChatState) -> usize {
        let mut applied = 0;
        while let Ok(reply) = self.reply_rx.try_recv() {
            if self.apply_reply(state, reply) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next reply and apply it. Returns false when nothing is in flight.
    pub async fn next_reply(&mut self, state: &mut ChatState) -> bool {
        while !self.in_flight.is_empty() {
            match self.reply_rx.recv().await {
                Some(reply) => {
                    if self.apply_reply(state, reply) {
                        return true;
                    }
                }
                None => return false,
            }
        }
        false
    }

    /// Requests sent but not yet answered.
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    /// Abort every in-flight request. Their replies are never rendered.
    pub fn cancel_all(&mut self) {
        for (id, flight) in self.in_flight.drain() {
            debug!(target: "qabot.trace", request = %id, "cancelling request");
            flight.task.abort();
        }
    }
}

impl Drop for ChatController {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
