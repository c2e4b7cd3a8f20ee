pub mod handlers;
pub mod types;

use crate::{
    Result,
    bot::Bot,
    config::Config,
    connector::{ActivitySender, BotConnectorClient},
    relay::{HttpAgentClient, MessageRelay},
};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Wires the agent client, connector and bot together from configuration.
pub fn build_state(config: &Config) -> AppState {
    let http = reqwest::Client::new();

    let sender: Arc<dyn ActivitySender> = Arc::new(BotConnectorClient::new(
        http.clone(),
        config.bot.auth_token.clone(),
    ));
    let agent = Arc::new(HttpAgentClient::new(http, &config.agent));
    info!("Relaying messages to {}", agent.endpoint());

    let relay = MessageRelay::new(
        agent,
        Arc::clone(&sender),
        Duration::from_millis(config.bot.typing_interval_ms),
    );

    AppState {
        bot: Bot::new(relay, sender, config.bot.welcome_text.clone()),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/messages", post(handlers::messages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let app = router(build_state(&config));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
