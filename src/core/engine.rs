use crate::services::win_detector::check_win;

use super::{
    constants::MIN_PLAYERS, player::validate_name, Game, GameError, GameStatus, QueuedPlayer,
    WaitingQueue,
};

/// Result of a successfully applied move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game continues; the turn passed to the next player
    Continue,
    /// The move completed a winning line
    Won { winner: String },
    /// The move filled the board with no winning line
    Draw,
}

/// Authoritative state machine for the waiting queue and the game slot
///
/// At most one game record exists at a time; the slot holds the active
/// game, or the finished game awaiting reset, or nothing (waiting state).
/// All rules live here; transport layers only forward intents. Callers
/// wrap the engine in a lock and hold it across each whole call, which
/// makes every operation an atomic read-validate-write transaction. A
/// failed precondition returns an error with no partial writes.
#[derive(Debug, Default)]
pub struct GameEngine {
    queue: WaitingQueue,
    game: Option<Game>,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            queue: WaitingQueue::new(),
            game: None,
        }
    }

    /// Queued players in join order
    pub fn queue(&self) -> &[QueuedPlayer] {
        self.queue.players()
    }

    /// The current game record: the active game if one exists, else the
    /// finished game awaiting reset, else None
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    fn has_active_game(&self) -> bool {
        self.game.as_ref().is_some_and(|g| g.is_active())
    }

    /// Join the waiting queue
    ///
    /// Idempotent by name: rejoining with a queued name returns the
    /// existing identifier. Joining is allowed while a finished game sits
    /// in the slot, only an active game closes the queue.
    ///
    /// # Arguments
    ///
    /// * `name` - Raw player name; validated and trimmed before use
    ///
    /// # Returns
    ///
    /// The player_id of the new or existing queue entry
    ///
    /// # Errors
    ///
    /// `GameInProgress` if an active game exists, `InvalidName` if the
    /// name fails validation
    pub fn join_queue(&mut self, name: &str) -> Result<String, GameError> {
        if self.has_active_game() {
            return Err(GameError::GameInProgress);
        }

        let name = validate_name(name)?;
        Ok(self.queue.join(&name))
    }

    /// Start a game with every queued player, in queue order
    ///
    /// Clears the previous round's finished game, snapshots the queue into
    /// the new game's seat order, allocates an empty board of side
    /// `players + 1`, and drains the queue. Preconditions are checked
    /// before any state is touched.
    ///
    /// # Returns
    ///
    /// The game_id of the newly created game
    ///
    /// # Errors
    ///
    /// `GameAlreadyActive` if an active game exists, `NotEnoughPlayers`
    /// with fewer than two queued players
    pub fn start_game(&mut self) -> Result<String, GameError> {
        if self.has_active_game() {
            return Err(GameError::GameAlreadyActive);
        }

        if self.queue.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }

        // Preconditions hold; the previous round's finished game can go.
        let players = self.queue.drain_names();
        let game = Game::new(players);
        let game_id = game.game_id.clone();
        self.game = Some(game);

        Ok(game_id)
    }

    /// Apply a move for `player_name` at (row, col)
    ///
    /// On success the mark is written and the game either continues with
    /// the turn advanced, or transitions to finished on a win or a full
    /// board. Failures leave the game untouched.
    ///
    /// # Errors
    ///
    /// `NoActiveGame`, `NotYourTurn`, `OutOfBounds`, or `CellOccupied`
    pub fn make_move(
        &mut self,
        player_name: &str,
        row: usize,
        col: usize,
    ) -> Result<MoveOutcome, GameError> {
        let game = match self.game.as_mut().filter(|g| g.is_active()) {
            Some(game) => game,
            None => return Err(GameError::NoActiveGame),
        };

        if game.current_player() != player_name {
            return Err(GameError::NotYourTurn);
        }

        let side = game.board.side();
        if row >= side || col >= side {
            return Err(GameError::OutOfBounds { row, col, side });
        }

        if game.board.mark(row, col).is_some() {
            return Err(GameError::CellOccupied);
        }

        game.board.place(row, col, player_name.to_string());

        if check_win(&game.board, row, col, player_name) {
            game.finish(Some(player_name.to_string()));
            return Ok(MoveOutcome::Won {
                winner: player_name.to_string(),
            });
        }

        if game.board.is_full() {
            game.finish(None);
            return Ok(MoveOutcome::Draw);
        }

        game.advance_turn();
        Ok(MoveOutcome::Continue)
    }

    /// Clear the finished game and move its players back into the queue
    ///
    /// Every player from the finished game is re-enqueued in seat order
    /// with a freshly generated identifier, then the game record is
    /// deleted, returning the system to the waiting state.
    ///
    /// # Errors
    ///
    /// `NoFinishedGame` unless the slot holds a finished game
    pub fn reset_game(&mut self) -> Result<(), GameError> {
        let finished = match self.game.take() {
            Some(game) if game.status == GameStatus::Finished => game,
            other => {
                self.game = other;
                return Err(GameError::NoFinishedGame);
            }
        };

        for name in &finished.players {
            self.queue.push(name);
        }

        Ok(())
    }
}
