use crate::activity::MessageEvent;
use serde::{Deserialize, Serialize};

/// JSON body posted to the agent's `/chat` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPayload {
    pub message: String,
    pub user_id: String,
    pub conversation_id: String,
}

impl From<&MessageEvent> for ChatPayload {
    fn from(event: &MessageEvent) -> Self {
        Self {
            message: event.text.clone(),
            user_id: event.user_id.clone(),
            conversation_id: event.conversation_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub response: String,
}
