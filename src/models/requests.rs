use serde::{Deserialize, Serialize};

/// Request to join the waiting queue
///
/// The name is validated by the engine (trimmed, 1-20 characters,
/// alphanumeric and spaces only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinQueueRequest {
    /// Player's display name
    pub name: String,
}

/// Request to place a mark on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Name of the player making the move
    pub player_name: String,
    pub row: usize,
    pub col: usize,
}
