use serde_json::{Value, json};
use teams_relay::{
    activity::{InboundActivity, MessageEvent, ReplyTarget},
    config::{AgentConfig, BotConfig, Config, ServerConfig},
};

pub const SERVICE_URL: &str = "https://smba.example.com/emea/";

/// Create a test configuration pointing the agent at `base_url`
pub fn create_test_config(base_url: &str) -> Config {
    Config {
        server: ServerConfig::default(),
        agent: AgentConfig {
            base_url: base_url.to_string(),
            request_timeout_secs: None,
        },
        bot: BotConfig::default(),
    }
}

pub fn test_target() -> ReplyTarget {
    ReplyTarget {
        service_url: SERVICE_URL.to_string(),
        conversation_id: "conv-1".to_string(),
        reply_to_id: Some("act-1".to_string()),
    }
}

pub fn message_json(text: &str) -> Value {
    json!({
        "type": "message",
        "id": "act-1",
        "text": text,
        "serviceUrl": SERVICE_URL,
        "from": { "id": "user-1", "name": "Ada" },
        "recipient": { "id": "bot-1", "name": "Relay" },
        "conversation": { "id": "conv-1" }
    })
}

pub fn members_added_json() -> Value {
    json!({
        "type": "conversationUpdate",
        "id": "act-2",
        "serviceUrl": SERVICE_URL,
        "recipient": { "id": "bot-1" },
        "conversation": { "id": "conv-1" },
        "membersAdded": [{ "id": "user-1" }, { "id": "bot-1" }]
    })
}

pub fn message_activity(text: &str) -> InboundActivity {
    serde_json::from_value(message_json(text)).unwrap()
}

pub fn message_event(text: &str) -> MessageEvent {
    MessageEvent::try_from(&message_activity(text)).unwrap()
}
