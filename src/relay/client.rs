use super::types::{ChatPayload, ChatReply};
use crate::{RelayError, config::AgentConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait AgentClient: Send + Sync {
    /// Sends one chat turn and returns the agent's reply text.
    async fn chat(&self, payload: &ChatPayload) -> Result<String, RelayError>;
}

pub struct HttpAgentClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpAgentClient {
    pub fn new(client: reqwest::Client, config: &AgentConfig) -> Self {
        Self {
            client,
            endpoint: config.chat_endpoint(),
            timeout: config.request_timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AgentClient for HttpAgentClient {
    async fn chat(&self, payload: &ChatPayload) -> Result<String, RelayError> {
        debug!(
            conversation_id = %payload.conversation_id,
            "Posting message to agent at {}", self.endpoint
        );

        let mut request = self.client.post(&self.endpoint).json(payload);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RelayError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RelayError::transport(e.to_string()))?;
        let reply: ChatReply =
            serde_json::from_slice(&body).map_err(|e| RelayError::decode(e.to_string()))?;

        debug!("Agent replied with {} bytes", reply.response.len());
        Ok(reply.response)
    }
}
