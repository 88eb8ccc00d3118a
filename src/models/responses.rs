use serde::{Deserialize, Serialize};

use crate::core::{Game, GameEngine, GameStatus, QueuedPlayer};

/// Queue entry for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedPlayerResponse {
    pub name: String,
    pub player_id: String,
}

impl QueuedPlayerResponse {
    pub fn from_player(player: &QueuedPlayer) -> Self {
        Self {
            name: player.name.clone(),
            player_id: player.player_id.clone(),
        }
    }
}

/// Snapshot of the current game for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    /// Game's unique ID
    pub game_id: String,
    /// "active" or "finished"
    pub status: GameStatus,
    /// Seat order; index 0 moved first
    pub players: Vec<String>,
    /// The grid as rows of `name | null` cells
    pub board: Vec<Vec<Option<String>>>,
    /// Index into `players` of whoever moves next
    pub current_player_index: usize,
    /// Winner's name; absent while active or on a draw
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    /// Creation time as a unix timestamp
    pub created_at: i64,
}

impl GameResponse {
    pub fn from_game(game: &Game) -> Self {
        Self {
            game_id: game.game_id.clone(),
            status: game.status,
            players: game.players.clone(),
            board: game.board.rows().to_vec(),
            current_player_index: game.current_player_index,
            winner: game.winner.clone(),
            created_at: game.created_at.unix_timestamp(),
        }
    }
}

/// Full queue + game snapshot pushed over the WebSocket channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub queue: Vec<QueuedPlayerResponse>,
    pub game: Option<GameResponse>,
}

impl SnapshotResponse {
    pub fn from_engine(engine: &GameEngine) -> Self {
        Self {
            queue: engine
                .queue()
                .iter()
                .map(QueuedPlayerResponse::from_player)
                .collect(),
            game: engine.game().map(GameResponse::from_game),
        }
    }
}
