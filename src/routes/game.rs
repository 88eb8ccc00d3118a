use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    core::MoveOutcome,
    models::{GameResponse, MoveRequest},
    services::notify,
    state::AppState,
};

use super::error_response;

/// Fetch the current game record
///
/// Returns the active game if one exists, else the finished game awaiting
/// reset, else 404.
pub async fn get_game(
    State(state): State<AppState>,
) -> Result<Json<GameResponse>, (StatusCode, String)> {
    let engine = state.engine.read().await;

    match engine.game() {
        Some(game) => Ok(Json(GameResponse::from_game(game))),
        None => Err((StatusCode::NOT_FOUND, "No current game".to_string())),
    }
}

/// Start a game with every queued player
///
/// # Returns
///
/// JSON response with the new game_id
pub async fn start_game(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut engine = state.engine.write().await;
    let game_id = engine.start_game().map_err(error_response)?;
    let player_count = engine
        .game()
        .map(|g| g.players.len())
        .unwrap_or_default();
    drop(engine);

    tracing::info!("Game started: id={} players={}", game_id, player_count);
    notify::publish(&state.events, notify::GAME_STARTED);

    Ok(Json(serde_json::json!({
        "status": "started",
        "game_id": game_id
    })))
}

/// Apply a move for the named player
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `request` - JSON body with player_name, row, col
///
/// # Returns
///
/// JSON response reporting whether the game continues or finished
pub async fn make_move(
    State(state): State<AppState>,
    Json(request): Json<MoveRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut engine = state.engine.write().await;
    let outcome = engine
        .make_move(&request.player_name, request.row, request.col)
        .map_err(error_response)?;
    drop(engine);

    notify::publish(&state.events, notify::MOVE_APPLIED);

    let body = match outcome {
        MoveOutcome::Continue => {
            tracing::debug!(
                "Move applied: player={} cell=({}, {})",
                request.player_name,
                request.row,
                request.col
            );
            serde_json::json!({ "status": "ok" })
        }
        MoveOutcome::Won { winner } => {
            tracing::info!("Game won: winner={}", winner);
            serde_json::json!({ "status": "finished", "winner": winner })
        }
        MoveOutcome::Draw => {
            tracing::info!("Game drawn");
            serde_json::json!({ "status": "finished", "winner": null })
        }
    };

    Ok(Json(body))
}

/// Clear the finished game and re-enqueue its players
pub async fn reset_game(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut engine = state.engine.write().await;
    engine.reset_game().map_err(error_response)?;
    let queued = engine.queue().len();
    drop(engine);

    tracing::info!("Game reset: {} players re-queued", queued);
    notify::publish(&state.events, notify::GAME_RESET);

    Ok(Json(serde_json::json!({ "status": "reset" })))
}
