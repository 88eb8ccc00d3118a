pub mod game;
pub mod health;
pub mod queue;
pub mod websocket;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{core::GameError, state::AppState};

/// Build the application router
///
/// Shared between `main` and the integration tests so both exercise the
/// same route table and middleware stack.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Health and root
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // Waiting queue
        .route("/api/queue", get(queue::get_queue))
        .route("/api/queue/join", post(queue::join_queue))
        // Game lifecycle
        .route("/api/game", get(game::get_game))
        .route("/api/game/start", post(game::start_game))
        .route("/api/game/move", post(game::make_move))
        .route("/api/game/reset", post(game::reset_game))
        // WebSocket push channel
        .route("/ws", get(websocket::websocket_handler))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
}

/// Map engine errors onto HTTP responses
///
/// Every variant is a caller-facing validation failure; the message is
/// surfaced to the client as-is.
pub(crate) fn error_response(err: GameError) -> (StatusCode, String) {
    let status = match err {
        GameError::GameInProgress
        | GameError::GameAlreadyActive
        | GameError::NotYourTurn
        | GameError::CellOccupied => StatusCode::CONFLICT,
        GameError::NotEnoughPlayers
        | GameError::InvalidName(_)
        | GameError::OutOfBounds { .. } => StatusCode::BAD_REQUEST,
        GameError::NoActiveGame | GameError::NoFinishedGame => StatusCode::NOT_FOUND,
    };

    (status, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_errors() {
        let (status, msg) = error_response(GameError::GameInProgress);
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(msg, "Game is in progress. Please wait for the next game.");

        let (status, _) = error_response(GameError::NotYourTurn);
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_bad_request_errors() {
        let (status, _) = error_response(GameError::NotEnoughPlayers);
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(GameError::OutOfBounds {
            row: 9,
            col: 0,
            side: 3,
        });
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_errors() {
        let (status, _) = error_response(GameError::NoActiveGame);
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = error_response(GameError::NoFinishedGame);
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
