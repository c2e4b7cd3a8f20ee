use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use teams_relay::{
    Error, RelayError, Result,
    activity::{OutgoingActivity, ReplyTarget},
    connector::ActivitySender,
    relay::{AgentClient, ChatPayload},
};
use tokio::time::Instant;

/// One activity captured by [`RecordingSender`].
#[derive(Debug, Clone)]
pub struct SentActivity {
    pub at: Instant,
    pub target: ReplyTarget,
    pub activity: OutgoingActivity,
}

impl SentActivity {
    pub fn text(&self) -> Option<&str> {
        self.activity.text.as_deref()
    }
}

/// Mock activity sender that records everything posted to it.
#[derive(Debug, Default)]
pub struct RecordingSender {
    pub sent: Arc<Mutex<Vec<SentActivity>>>,
    pub fail_typing: bool,
    pub fail_messages: bool,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_typing(mut self) -> Self {
        self.fail_typing = true;
        self
    }

    pub fn failing_messages(mut self) -> Self {
        self.fail_messages = true;
        self
    }

    pub fn sent(&self) -> Vec<SentActivity> {
        self.sent.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<SentActivity> {
        self.sent()
            .into_iter()
            .filter(|s| !s.activity.is_typing())
            .collect()
    }

    pub fn typing_count(&self) -> usize {
        self.sent()
            .iter()
            .filter(|s| s.activity.is_typing())
            .count()
    }
}

#[async_trait]
impl ActivitySender for RecordingSender {
    async fn send_activity(
        &self,
        target: &ReplyTarget,
        activity: OutgoingActivity,
    ) -> Result<()> {
        let failing = if activity.is_typing() {
            self.fail_typing
        } else {
            self.fail_messages
        };
        self.sent.lock().unwrap().push(SentActivity {
            at: Instant::now(),
            target: target.clone(),
            activity,
        });
        if failing {
            return Err(Error::connector("mock send failure"));
        }
        Ok(())
    }
}

/// Mock agent that answers every request with the same outcome, optionally
/// after a delay.
#[derive(Debug)]
pub struct MockAgentClient {
    pub outcome: std::result::Result<String, RelayError>,
    pub delay: Option<Duration>,
    pub requests: Arc<Mutex<Vec<ChatPayload>>>,
}

impl MockAgentClient {
    pub fn replying(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
            delay: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: RelayError) -> Self {
        Self {
            outcome: Err(error),
            delay: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_requests(&self) -> Vec<ChatPayload> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentClient for MockAgentClient {
    async fn chat(&self, payload: &ChatPayload) -> std::result::Result<String, RelayError> {
        self.requests.lock().unwrap().push(payload.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}
