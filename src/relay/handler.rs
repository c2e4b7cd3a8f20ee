use super::{client::AgentClient, types::ChatPayload, typing::keep_typing};
use crate::{RelayError, activity::MessageEvent, connector::ActivitySender};
use std::{sync::Arc, time::Duration};
use tokio::sync::oneshot;
use tracing::{Instrument, error, info, warn};

/// Relays one user message to the agent service and posts the outcome back
/// to the conversation, with a typing indicator while the request is pending.
#[derive(Clone)]
pub struct MessageRelay {
    agent: Arc<dyn AgentClient>,
    sender: Arc<dyn ActivitySender>,
    typing_interval: Duration,
}

impl MessageRelay {
    pub fn new(
        agent: Arc<dyn AgentClient>,
        sender: Arc<dyn ActivitySender>,
        typing_interval: Duration,
    ) -> Self {
        Self {
            agent,
            sender,
            typing_interval,
        }
    }

    /// Sends exactly one terminal activity for `event`. Typing activities
    /// are only ever sent before it.
    pub async fn handle(&self, event: &MessageEvent) {
        let target = event.reply_to.clone();
        let (stop_tx, stop_rx) = oneshot::channel();

        let typing = {
            let sender = Arc::clone(&self.sender);
            let target = target.clone();
            let interval = self.typing_interval;
            tokio::spawn(
                async move {
                    keep_typing(sender.as_ref(), &target, interval, stop_rx).await;
                }
                .in_current_span(),
            )
        };

        if let Err(e) = self.sender.send_typing(&target).await {
            warn!("initial typing indicator failed: {e}");
        }

        let payload = ChatPayload::from(event);
        let outcome = self.agent.chat(&payload).await;

        // Barrier: the loop must be gone before the reply goes out.
        let _ = stop_tx.send(());
        if let Err(e) = typing.await {
            error!("typing task ended abnormally: {e}");
        }

        let reply = reply_text(outcome);
        if let Err(e) = self.sender.send_text(&target, &reply).await {
            warn!(
                conversation_id = %event.conversation_id,
                "failed to deliver reply: {e}"
            );
        }
    }
}

/// Maps the agent outcome to the single text posted back to the user.
pub fn reply_text(outcome: Result<String, RelayError>) -> String {
    match outcome {
        Ok(response) => {
            info!("Relaying agent response");
            response
        }
        Err(e) => {
            error!("Agent request failed: {e}");
            e.user_message()
        }
    }
}
