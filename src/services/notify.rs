use tokio::sync::broadcast;

/// Event names published after each successful mutation
pub const QUEUE_CHANGED: &str = "queue_changed";
pub const GAME_STARTED: &str = "game_started";
pub const MOVE_APPLIED: &str = "move_applied";
pub const GAME_RESET: &str = "game_reset";

/// Build the update-trigger envelope pushed to connected sockets
///
/// Triggers carry no state; each socket fetches a fresh snapshot when one
/// arrives, so a lagging subscriber that drops triggers only skips
/// intermediate snapshots.
pub fn update_trigger(event: &str) -> String {
    serde_json::json!({
        "type": "update_trigger",
        "event": event
    })
    .to_string()
}

/// Publish an update trigger, ignoring the no-subscribers case
pub fn publish(tx: &broadcast::Sender<String>, event: &str) {
    let _ = tx.send(update_trigger(event));
}

/// Build the state_update envelope wrapping a serializable snapshot
pub fn state_update<T: serde::Serialize>(data: &T) -> String {
    serde_json::json!({
        "type": "state_update",
        "data": data
    })
    .to_string()
}
