use thiserror::Error;

/// Validation failures surfaced to callers of the game engine.
///
/// Every variant is recoverable by the caller retrying with corrected
/// state (waiting for the game to end, waiting for one's turn, picking an
/// empty cell). None are fatal to the server; each aborts only the single
/// requested operation, leaving all state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A game is active, so the queue is closed to new joins
    #[error("Game is in progress. Please wait for the next game.")]
    GameInProgress,

    /// start was called while a game is already active
    #[error("A game is already in progress")]
    GameAlreadyActive,

    /// start was called with fewer than the minimum queued players
    #[error("Need at least 2 players to start a game")]
    NotEnoughPlayers,

    /// A move was submitted with no active game
    #[error("No active game")]
    NoActiveGame,

    /// A move was submitted by a player out of turn
    #[error("Not your turn")]
    NotYourTurn,

    /// A move targeted a cell that already holds a mark
    #[error("Cell is already occupied")]
    CellOccupied,

    /// reset was called with no finished game
    #[error("No finished game to reset")]
    NoFinishedGame,

    /// A player name failed validation
    #[error("Invalid player name: {0}")]
    InvalidName(String),

    /// A move targeted a cell outside the board
    #[error("Cell ({row}, {col}) is outside the {side}x{side} board")]
    OutOfBounds { row: usize, col: usize, side: usize },
}
