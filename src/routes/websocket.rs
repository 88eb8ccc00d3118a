use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast;

use crate::{
    core::constants::MAX_WS_MESSAGE_BYTES, models::SnapshotResponse, services::notify,
    state::AppState,
};

/// WebSocket endpoint for push updates
///
/// # Flow
///
/// 1. Accept the connection and send a full state snapshot
/// 2. Subscribe to the update-trigger channel
/// 3. On every trigger, push a fresh snapshot
/// 4. Handle client messages and close on oversized or binary frames
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle one WebSocket connection
async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let mut events_rx = state.events.subscribe();

    // Initial snapshot so the client never waits for a mutation
    let initial = snapshot_message(&state).await;
    if sender.send(Message::Text(initial)).await.is_err() {
        return;
    }

    let state_clone = state.clone();
    let mut send_task = tokio::spawn(async move {
        loop {
            match events_rx.recv().await {
                Ok(trigger) => {
                    tracing::debug!("Pushing snapshot for trigger: {}", trigger);
                    let message = snapshot_message(&state_clone).await;
                    if sender.send(Message::Text(message)).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    // Triggers carry no state; only intermediate
                    // snapshots were skipped. Push a current one.
                    tracing::debug!("Socket lagged, {} triggers dropped", skipped);
                    let message = snapshot_message(&state_clone).await;
                    if sender.send(Message::Text(message)).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    if text.len() > MAX_WS_MESSAGE_BYTES {
                        tracing::warn!("Oversized message: {} bytes", text.len());
                        break;
                    }

                    if text == "ping" {
                        tracing::debug!("Client ping");
                    }
                }
                Message::Close(_) => break,
                Message::Ping(_) | Message::Pong(_) => {
                    // Axum handles WebSocket ping/pong frames automatically
                }
                Message::Binary(_) => {
                    tracing::warn!("Unexpected binary message");
                    break;
                }
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    tracing::debug!("WebSocket connection closed");
}

/// Serialize the current queue + game snapshot as a state_update message
async fn snapshot_message(state: &AppState) -> String {
    let engine = state.engine.read().await;
    let snapshot = SnapshotResponse::from_engine(&engine);
    drop(engine);

    notify::state_update(&snapshot)
}
