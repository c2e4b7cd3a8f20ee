use super::types::ErrorResponse;
use crate::{Error, activity::InboundActivity, bot::Bot};
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{Instrument, error, info_span};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub bot: Bot,
}

pub async fn messages(
    State(state): State<AppState>,
    Json(activity): Json<InboundActivity>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let turn_id = Uuid::new_v4();
    let span = info_span!(
        "turn",
        %turn_id,
        activity_type = %activity.activity_type,
        conversation_id = activity.conversation_id().unwrap_or_default()
    );

    // The turn must finish even if the channel drops this request.
    let bot = state.bot.clone();
    let turn = tokio::spawn(async move { bot.on_activity(&activity).await }.instrument(span));

    let outcome = match turn.await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Turn {} aborted: {}", turn_id, e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("turn aborted: {e}"),
                }),
            ));
        }
    };

    match outcome {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            error!("Failed to process activity in turn {}: {}", turn_id, e);
            let status = match &e {
                Error::InvalidActivity(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err((
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
