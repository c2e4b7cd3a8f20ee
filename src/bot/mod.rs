use crate::{
    Result,
    activity::{InboundActivity, MessageEvent},
    connector::ActivitySender,
    relay::MessageRelay,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const HELP_COMMAND: &str = "/help";

/// Routes inbound activities: greetings and `/help` get the welcome text,
/// every other message goes through the relay.
#[derive(Clone)]
pub struct Bot {
    relay: MessageRelay,
    sender: Arc<dyn ActivitySender>,
    welcome_text: String,
}

impl Bot {
    pub fn new(
        relay: MessageRelay,
        sender: Arc<dyn ActivitySender>,
        welcome_text: impl Into<String>,
    ) -> Self {
        Self {
            relay,
            sender,
            welcome_text: welcome_text.into(),
        }
    }

    pub async fn on_activity(&self, activity: &InboundActivity) -> Result<()> {
        if activity.has_members_added() {
            info!(
                "{} member(s) added, sending welcome",
                activity.members_added.len()
            );
            return self.send_welcome(activity).await;
        }

        if !activity.is_message() {
            debug!("Ignoring activity of type '{}'", activity.activity_type);
            return Ok(());
        }

        if is_help_command(activity.text.as_deref()) {
            return self.send_welcome(activity).await;
        }

        let event = MessageEvent::try_from(activity)?;
        info!(
            user_id = %event.user_id,
            conversation_id = %event.conversation_id,
            "Relaying message"
        );
        self.relay.handle(&event).await;
        Ok(())
    }

    async fn send_welcome(&self, activity: &InboundActivity) -> Result<()> {
        let Some(target) = activity.reply_target() else {
            debug!("No reply target for welcome, skipping");
            return Ok(());
        };
        if let Err(e) = self.sender.send_text(&target, &self.welcome_text).await {
            warn!(
                conversation_id = %target.conversation_id,
                "failed to deliver welcome: {e}"
            );
        }
        Ok(())
    }
}

pub fn is_help_command(text: Option<&str>) -> bool {
    text.is_some_and(|t| t.trim().eq_ignore_ascii_case(HELP_COMMAND))
}
