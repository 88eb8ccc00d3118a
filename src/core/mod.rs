pub mod board;
pub mod constants;
pub mod engine;
pub mod error;
pub mod game;
pub mod player;
pub mod queue;

pub use board::Board;
pub use engine::{GameEngine, MoveOutcome};
pub use error::GameError;
pub use game::{Game, GameStatus};
pub use player::QueuedPlayer;
pub use queue::WaitingQueue;
