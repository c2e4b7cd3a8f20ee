use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Activity types this bot reacts to.
pub const MESSAGE: &str = "message";
pub const CONVERSATION_UPDATE: &str = "conversationUpdate";
pub const TYPING: &str = "typing";

/// Activity as delivered by the channel to `POST /api/messages`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundActivity {
    #[serde(rename = "type")]
    pub activity_type: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub service_url: Option<String>,
    #[serde(default)]
    pub from: Option<ChannelAccount>,
    #[serde(default)]
    pub recipient: Option<ChannelAccount>,
    #[serde(default)]
    pub conversation: Option<ConversationAccount>,
    #[serde(default)]
    pub members_added: Vec<ChannelAccount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAccount {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationAccount {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub conversation_type: Option<String>,
}

impl InboundActivity {
    pub fn is_message(&self) -> bool {
        self.activity_type.eq_ignore_ascii_case(MESSAGE)
    }

    pub fn has_members_added(&self) -> bool {
        self.activity_type.eq_ignore_ascii_case(CONVERSATION_UPDATE)
            && !self.members_added.is_empty()
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation.as_ref()?.id.as_deref()
    }

    pub fn sender_id(&self) -> Option<&str> {
        self.from.as_ref()?.id.as_deref()
    }

    /// Where replies to this activity must be posted.
    pub fn reply_target(&self) -> Option<ReplyTarget> {
        let service_url = self.service_url.as_deref().filter(|s| !s.is_empty())?;
        let conversation_id = self.conversation_id().filter(|s| !s.is_empty())?;
        Some(ReplyTarget {
            service_url: service_url.to_string(),
            conversation_id: conversation_id.to_string(),
            reply_to_id: self.id.clone(),
        })
    }
}

/// Addressing information for replies within one conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTarget {
    pub service_url: String,
    pub conversation_id: String,
    pub reply_to_id: Option<String>,
}

/// A user message ready to be relayed. Built once per turn and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEvent {
    pub text: String,
    pub user_id: String,
    pub conversation_id: String,
    pub reply_to: ReplyTarget,
}

impl TryFrom<&InboundActivity> for MessageEvent {
    type Error = crate::Error;

    fn try_from(activity: &InboundActivity) -> crate::Result<Self> {
        let user_id = activity
            .sender_id()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| crate::Error::invalid_activity("message has no sender id"))?;
        let reply_to = activity.reply_target().ok_or_else(|| {
            crate::Error::invalid_activity("message has no conversation id or service url")
        })?;

        Ok(Self {
            text: activity.text.clone().unwrap_or_default(),
            user_id: user_id.to_string(),
            conversation_id: reply_to.conversation_id.clone(),
            reply_to,
        })
    }
}

/// Activity sent back to the conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingActivity {
    #[serde(rename = "type")]
    pub activity_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl OutgoingActivity {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            activity_type: MESSAGE.to_string(),
            text: Some(text.into()),
            reply_to_id: None,
            timestamp: Utc::now(),
        }
    }

    pub fn typing() -> Self {
        Self {
            activity_type: TYPING.to_string(),
            text: None,
            reply_to_id: None,
            timestamp: Utc::now(),
        }
    }

    pub fn in_reply_to(mut self, id: Option<String>) -> Self {
        self.reply_to_id = id;
        self
    }

    pub fn is_typing(&self) -> bool {
        self.activity_type == TYPING
    }
}
