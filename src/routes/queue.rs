use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    models::{JoinQueueRequest, QueuedPlayerResponse},
    services::notify,
    state::AppState,
};

use super::error_response;

/// Add a player to the waiting queue
///
/// Idempotent by name: rejoining returns the existing player_id. Fails
/// with 409 while a game is active.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `request` - JSON body with the player's name
///
/// # Returns
///
/// JSON response with the player_id
pub async fn join_queue(
    State(state): State<AppState>,
    Json(request): Json<JoinQueueRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut engine = state.engine.write().await;
    let player_id = engine.join_queue(&request.name).map_err(error_response)?;
    drop(engine);

    tracing::info!("Player queued: name={} id={}", request.name, player_id);
    notify::publish(&state.events, notify::QUEUE_CHANGED);

    Ok(Json(serde_json::json!({
        "player_id": player_id
    })))
}

/// List the waiting queue in join order
pub async fn get_queue(State(state): State<AppState>) -> Json<Vec<QueuedPlayerResponse>> {
    let engine = state.engine.read().await;

    Json(
        engine
            .queue()
            .iter()
            .map(QueuedPlayerResponse::from_player)
            .collect(),
    )
}
