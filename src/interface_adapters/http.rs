// JSON HTTP handlers and the shared error payload.

use crate::interface_adapters::net::sanitize_token;
use crate::interface_adapters::protocol::{
    CommandAcceptedDto, CommandDto, CourseDto, ListeningDto, WorldUpdateDto,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::GameEvent;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    // Human-readable error string for consistent JSON error responses.
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn world_task_gone() -> ApiError {
    api_error(StatusCode::SERVICE_UNAVAILABLE, "world task is not running")
}

async fn enqueue(state: &AppState, event: GameEvent) -> Result<StatusCode, ApiError> {
    state.session.input_tx.send(event).await.map_err(|_| {
        warn!("input channel closed; rejecting request");
        world_task_gone()
    })?;
    Ok(StatusCode::ACCEPTED)
}

// Latest published actor pose.
pub async fn get_actor(
    State(state): State<Arc<AppState>>,
) -> Result<Json<WorldUpdateDto>, ApiError> {
    if state.session.input_tx.is_closed() {
        return Err(world_task_gone());
    }
    Ok(Json(WorldUpdateDto::from(state.session.latest())))
}

pub async fn get_course(State(state): State<Arc<AppState>>) -> Json<CourseDto> {
    Json(CourseDto::new(state.session.course(), state.session.hitbox()))
}

// Queues one recognized token for the next world turn. The reply carries the
// listening state at enqueue time: tokens queued while idle are dropped.
pub async fn post_command(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CommandDto>,
) -> Result<(StatusCode, Json<CommandAcceptedDto>), ApiError> {
    let Some(token) = sanitize_token(&payload.word) else {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "word must be a short non-empty token",
        ));
    };
    let listening = state.session.session_state_tx.borrow().is_listening();
    debug!(token, listening, "command received over http");

    let status = enqueue(
        &state,
        GameEvent::Command {
            token: token.to_string(),
        },
    )
    .await?;
    Ok((status, Json(CommandAcceptedDto { listening })))
}

pub async fn post_listening(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ListeningDto>,
) -> Result<StatusCode, ApiError> {
    enqueue(
        &state,
        GameEvent::SetListening {
            listening: payload.listening,
        },
    )
    .await
}
