use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{constants::GAME_ID_LEN, Board};

/// Lifecycle state of the stored game record
///
/// The waiting state is modeled as the absence of a game record, so only
/// the two stored states appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Finished,
}

/// The single game record, active or awaiting reset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier for this game
    pub game_id: String,
    /// Current lifecycle state
    pub status: GameStatus,
    /// Seat order; index 0 moves first. Board marks are these names.
    pub players: Vec<String>,
    /// The grid, side length players.len() + 1
    pub board: Board,
    /// Index into `players` of whoever moves next
    pub current_player_index: usize,
    /// Winning player's name; None on a draw or while active
    pub winner: Option<String>,
    /// When the game was created
    pub created_at: OffsetDateTime,
}

impl Game {
    /// Create an active game for the given players, in seat order
    ///
    /// # Arguments
    ///
    /// * `players` - Player names snapshotted from the queue
    pub fn new(players: Vec<String>) -> Self {
        let side = players.len() + 1;

        Self {
            game_id: generate_game_id(),
            status: GameStatus::Active,
            players,
            board: Board::new(side),
            current_player_index: 0,
            winner: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// Name of the player whose turn it is
    pub fn current_player(&self) -> &str {
        &self.players[self.current_player_index]
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    /// Transition to finished; `winner` is None for a draw
    pub(crate) fn finish(&mut self, winner: Option<String>) {
        self.status = GameStatus::Finished;
        self.winner = winner;
    }

    /// Pass the turn to the next player in seat order
    pub(crate) fn advance_turn(&mut self) {
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
    }
}

/// Generate a URL-safe random game ID
fn generate_game_id() -> String {
    use rand::rngs::OsRng;

    OsRng
        .sample_iter(&Alphanumeric)
        .take(GAME_ID_LEN)
        .map(char::from)
        .collect()
}
