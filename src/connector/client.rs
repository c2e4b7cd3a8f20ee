use super::ActivitySender;
use crate::{
    Error, Result,
    activity::{OutgoingActivity, ReplyTarget},
};
use async_trait::async_trait;
use tracing::debug;

/// Posts activities to the Bot Connector REST endpoint of the channel that
/// delivered the inbound activity.
pub struct BotConnectorClient {
    client: reqwest::Client,
    auth_token: Option<String>,
}

impl BotConnectorClient {
    pub fn new(client: reqwest::Client, auth_token: Option<String>) -> Self {
        Self { client, auth_token }
    }

    pub fn activities_url(target: &ReplyTarget) -> String {
        format!(
            "{}/v3/conversations/{}/activities",
            target.service_url.trim_end_matches('/'),
            urlencoding::encode(&target.conversation_id)
        )
    }
}

#[async_trait]
impl ActivitySender for BotConnectorClient {
    async fn send_activity(
        &self,
        target: &ReplyTarget,
        activity: OutgoingActivity,
    ) -> Result<()> {
        let url = Self::activities_url(target);
        debug!(
            conversation_id = %target.conversation_id,
            activity_type = %activity.activity_type,
            "Sending activity"
        );

        let mut request = self.client.post(url).json(&activity);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::connector(format!(
                "activity send failed ({status}): {body}"
            )));
        }
        Ok(())
    }
}
