mod client;

pub use client::*;

use crate::{
    Result,
    activity::{OutgoingActivity, ReplyTarget},
};
use async_trait::async_trait;

/// Capability to post activities back into a conversation.
#[async_trait]
pub trait ActivitySender: Send + Sync {
    async fn send_activity(
        &self,
        target: &ReplyTarget,
        activity: OutgoingActivity,
    ) -> Result<()>;

    async fn send_text(&self, target: &ReplyTarget, text: &str) -> Result<()> {
        let activity = OutgoingActivity::message(text).in_reply_to(target.reply_to_id.clone());
        self.send_activity(target, activity).await
    }

    async fn send_typing(&self, target: &ReplyTarget) -> Result<()> {
        self.send_activity(target, OutgoingActivity::typing()).await
    }
}
