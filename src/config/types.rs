use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub agent: AgentConfig,
    #[serde(default)]
    pub bot: BotConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Remote chat API the relay forwards messages to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub base_url: String,
    /// Unset means the outbound request has no timeout of its own.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_welcome_text")]
    pub welcome_text: String,
    #[serde(default = "default_typing_interval_ms")]
    pub typing_interval_ms: u64,
    /// Pre-issued bearer token for Bot Connector calls. Never acquired or
    /// refreshed by this service.
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            welcome_text: default_welcome_text(),
            typing_interval_ms: default_typing_interval_ms(),
            auth_token: None,
        }
    }
}

impl AgentConfig {
    pub fn chat_endpoint(&self) -> String {
        format!("{}/chat", self.base_url.trim_end_matches('/'))
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3978
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_welcome_text() -> String {
    "Welcome to the Echo Agent sample 🚀. \
     Type /help for help or send a message to see the echo feature in action."
        .to_string()
}

fn default_typing_interval_ms() -> u64 {
    3000
}
